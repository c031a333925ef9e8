pub mod category;

use crate::error::Error;
use crate::lifecycle::mapping::status_from_wire;
use crate::types::{AdDto, AdPayload, Listing, ListingDraft, ListingPatch};

/// Translation between backend records and [`Listing`].
pub struct AdMapper;

impl AdMapper {
    /// Backend record to internal listing.
    ///
    /// Optional text fields pass through as-is (absent stays `None`, never
    /// `""`); only `posted_by` defaults to an empty string.
    pub fn to_internal(dto: AdDto) -> Listing {
        Listing {
            id: dto.id.to_string(),
            title: dto.title,
            description: dto.description,
            seller: dto.seller,
            location: dto.location,
            cep: dto.cep,
            price: dto.price,
            category: category::category_from_id(dto.category_id),
            bedrooms: dto.bedrooms,
            bathrooms: dto.bathrooms,
            rules: dto.rules.unwrap_or_default(),
            amenities: dto.amenities.unwrap_or_default(),
            custom_rules: dto.custom_rules,
            custom_amenities: dto.custom_amenities,
            images: dto.images.unwrap_or_default(),
            status: status_from_wire(dto.status.as_deref()),
            posted_by: dto.user_id.map(|id| id.to_string()).unwrap_or_default(),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }

    pub fn to_internal_list(dtos: Vec<AdDto>) -> Vec<Listing> {
        tracing::debug!(count = dtos.len(), "mapping listing records");
        dtos.into_iter().map(Self::to_internal).collect()
    }

    /// Internal listing to wire payload.
    ///
    /// An id that is not numeric is dropped from the payload rather than
    /// rejected; use [`AdMapper::wire_id`] where the id is mandatory.
    pub fn to_wire(listing: &Listing) -> AdPayload {
        AdPayload {
            id: listing.id.trim().parse::<i64>().ok(),
            title: Some(listing.title.clone()),
            description: Some(listing.description.clone()),
            seller: listing.seller.clone(),
            location: listing.location.clone(),
            cep: listing.cep.clone(),
            price: listing.price,
            category_id: Some(category::category_id(listing.category)),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            rules: Some(listing.rules.clone()),
            amenities: Some(listing.amenities.clone()),
            custom_rules: listing.custom_rules.clone(),
            custom_amenities: listing.custom_amenities.clone(),
            images: Some(listing.images.clone()),
            status: Some(listing.status),
        }
    }

    /// Creation payload. Never carries an id.
    pub fn draft_to_wire(draft: &ListingDraft) -> AdPayload {
        AdPayload {
            id: None,
            title: Some(draft.title.clone()),
            description: Some(draft.description.clone()),
            seller: draft.seller.clone(),
            location: draft.location.clone(),
            cep: draft.cep.clone(),
            price: draft.price,
            category_id: Some(category::category_id(draft.category)),
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            rules: Some(draft.rules.clone()),
            amenities: Some(draft.amenities.clone()),
            custom_rules: draft.custom_rules.clone(),
            custom_amenities: draft.custom_amenities.clone(),
            images: Some(draft.images.clone()),
            status: draft.status,
        }
    }

    /// Partial update payload carrying only the fields present in `patch`.
    pub fn patch_to_wire(id: i64, patch: &ListingPatch) -> AdPayload {
        AdPayload {
            id: Some(id),
            title: patch.title.clone(),
            description: patch.description.clone(),
            seller: patch.seller.clone(),
            location: patch.location.clone(),
            cep: patch.cep.clone(),
            price: patch.price,
            category_id: patch.category.map(category::category_id),
            bedrooms: patch.bedrooms,
            bathrooms: patch.bathrooms,
            rules: patch.rules.clone(),
            amenities: patch.amenities.clone(),
            custom_rules: patch.custom_rules.clone(),
            custom_amenities: patch.custom_amenities.clone(),
            images: patch.images.clone(),
            status: None,
        }
    }

    pub fn wire_id(id: &str) -> Result<i64, Error> {
        id.trim().parse::<i64>().map_err(|_| Error::InvalidId {
            id: id.to_string(),
        })
    }
}
