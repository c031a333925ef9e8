use async_trait::async_trait;

use crate::error::Error;
use crate::filter::{ListingFilter, filter_listings};
use crate::lifecycle::{ListingStatus, StatusLifecycle, TransitionDecision};
use crate::mapping::AdMapper;
use crate::types::{AdDto, AdPayload, Listing, ListingDraft, ListingPatch};
use crate::validation::ListingPolicy;

/// Backend collaborator holding the authoritative listing records.
///
/// Implementations report transport failures as [`Error::Transport`] and a
/// missing record as `Ok(None)` from [`ListingRepository::fetch_by_id`].
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<AdDto>, Error>;

    async fn fetch_by_id(&self, id: i64) -> Result<Option<AdDto>, Error>;

    async fn fetch_by_owner(&self, owner: &str) -> Result<Vec<AdDto>, Error>;

    async fn create(&self, payload: &AdPayload) -> Result<AdDto, Error>;

    async fn update(&self, id: i64, payload: &AdPayload) -> Result<AdDto, Error>;

    async fn update_status(&self, id: i64, status: ListingStatus) -> Result<AdDto, Error>;

    async fn delete(&self, id: i64) -> Result<bool, Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusChange {
    /// The backend accepted the change; holds its view of the listing.
    Applied(Listing),
    /// The lifecycle does not allow this step. Nothing was submitted.
    Rejected {
        from: ListingStatus,
        to: ListingStatus,
    },
}

/// Listing use cases over an injected repository.
pub struct ListingService<R> {
    repo: R,
    policy: ListingPolicy,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_policy(repo, ListingPolicy::default())
    }

    pub fn with_policy(repo: R, policy: ListingPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> &ListingPolicy {
        &self.policy
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub async fn listings(&self, filter: Option<&ListingFilter>) -> Result<Vec<Listing>, Error> {
        let listings = AdMapper::to_internal_list(self.repo.fetch_all().await?);
        Ok(match filter {
            Some(filter) => filter_listings(&listings, filter),
            None => listings,
        })
    }

    pub async fn listing(&self, id: &str) -> Result<Option<Listing>, Error> {
        let wire_id = AdMapper::wire_id(id)?;
        let dto = self.repo.fetch_by_id(wire_id).await?;
        if dto.is_none() {
            tracing::debug!(id, "listing not found");
        }
        Ok(dto.map(AdMapper::to_internal))
    }

    pub async fn listings_by_owner(&self, owner: &str) -> Result<Vec<Listing>, Error> {
        Ok(AdMapper::to_internal_list(
            self.repo.fetch_by_owner(owner).await?,
        ))
    }

    /// Validates and submits a new listing. Validation failures never reach
    /// the repository.
    pub async fn create(&self, draft: ListingDraft) -> Result<Listing, Error> {
        let draft = self.policy.normalize_draft(draft);
        self.policy.validate_draft(&draft)?;
        let created = self.repo.create(&AdMapper::draft_to_wire(&draft)).await?;
        let listing = AdMapper::to_internal(created);
        tracing::info!(id = %listing.id, status = %listing.status, "listing created");
        Ok(listing)
    }

    /// Trims and validates the present fields, then submits them. Neither a
    /// bad id nor a failed validation reaches the repository.
    pub async fn update(&self, id: &str, patch: &ListingPatch) -> Result<Listing, Error> {
        let wire_id = AdMapper::wire_id(id)?;
        let patch = ListingPolicy::normalize_patch(patch.clone());
        self.policy.validate_patch(&patch)?;
        let payload = AdMapper::patch_to_wire(wire_id, &patch);
        let updated = self.repo.update(wire_id, &payload).await?;
        tracing::info!(id, "listing updated");
        Ok(AdMapper::to_internal(updated))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, Error> {
        let deleted = self.repo.delete(AdMapper::wire_id(id)?).await?;
        tracing::info!(id, deleted, "listing delete submitted");
        Ok(deleted)
    }

    /// Submits a status change if the lifecycle allows it.
    ///
    /// The caller's `listing` is not touched; on success the backend's record
    /// is returned and should replace the caller's copy.
    pub async fn change_status(
        &self,
        listing: &Listing,
        to: ListingStatus,
    ) -> Result<StatusChange, Error> {
        let from = listing.status;
        if StatusLifecycle::decide_transition(from, to) == TransitionDecision::Reject {
            tracing::debug!(id = %listing.id, %from, %to, "status transition rejected");
            return Ok(StatusChange::Rejected { from, to });
        }

        let updated = self
            .repo
            .update_status(AdMapper::wire_id(&listing.id)?, to)
            .await?;
        tracing::info!(id = %listing.id, %from, %to, "listing status changed");
        Ok(StatusChange::Applied(AdMapper::to_internal(updated)))
    }
}
