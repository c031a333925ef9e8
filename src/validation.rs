use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lifecycle::ListingStatus;
use crate::types::{ListingDraft, ListingPatch};

/// Business rules applied before any listing is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingPolicy {
    pub min_title_chars: usize,
    pub max_title_chars: usize,
    pub min_description_chars: usize,
    /// Upper bound for `price`. Prices must also be strictly positive.
    pub max_price: f64,
    pub max_images: usize,
    /// Status given to drafts that do not name one.
    pub default_status: ListingStatus,
}

impl Default for ListingPolicy {
    fn default() -> Self {
        Self {
            min_title_chars: 10,
            max_title_chars: 100,
            min_description_chars: 20,
            max_price: 1_000_000.0,
            max_images: 15,
            default_status: ListingStatus::Published,
        }
    }
}

impl ListingPolicy {
    pub fn from_json_str(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Trims text fields and fills in the default status.
    pub fn normalize_draft(&self, mut draft: ListingDraft) -> ListingDraft {
        draft.title = draft.title.trim().to_string();
        draft.description = draft.description.trim().to_string();
        draft.seller = trim_optional(draft.seller);
        draft.location = trim_optional(draft.location);
        draft.cep = trim_optional(draft.cep);
        draft.custom_rules = trim_optional(draft.custom_rules);
        draft.custom_amenities = trim_optional(draft.custom_amenities);
        draft.status = Some(draft.status.unwrap_or(self.default_status));
        draft
    }

    /// Trims the text fields a patch carries. Absent fields stay absent.
    pub fn normalize_patch(mut patch: ListingPatch) -> ListingPatch {
        patch.title = trim_optional(patch.title);
        patch.description = trim_optional(patch.description);
        patch.seller = trim_optional(patch.seller);
        patch.location = trim_optional(patch.location);
        patch.cep = trim_optional(patch.cep);
        patch.custom_rules = trim_optional(patch.custom_rules);
        patch.custom_amenities = trim_optional(patch.custom_amenities);
        patch
    }

    pub fn validate_draft(&self, draft: &ListingDraft) -> Result<(), Error> {
        self.check_title(&draft.title)?;
        self.check_description(&draft.description)?;
        if let Some(price) = draft.price {
            self.check_price(price)?;
        }
        self.check_images(draft.images.len())
    }

    pub fn validate_patch(&self, patch: &ListingPatch) -> Result<(), Error> {
        if let Some(title) = &patch.title {
            self.check_title(title)?;
        }
        if let Some(description) = &patch.description {
            self.check_description(description)?;
        }
        if let Some(price) = patch.price {
            self.check_price(price)?;
        }
        if let Some(images) = &patch.images {
            self.check_images(images.len())?;
        }
        Ok(())
    }

    fn check_title(&self, title: &str) -> Result<(), Error> {
        let len = title.trim().chars().count();
        if len == 0 {
            return Err(Error::validation("title is required"));
        }
        if len < self.min_title_chars {
            return Err(Error::validation(format!(
                "title must be at least {} characters",
                self.min_title_chars
            )));
        }
        if len > self.max_title_chars {
            return Err(Error::validation(format!(
                "title must not exceed {} characters",
                self.max_title_chars
            )));
        }
        Ok(())
    }

    fn check_description(&self, description: &str) -> Result<(), Error> {
        let len = description.trim().chars().count();
        if len == 0 {
            return Err(Error::validation("description is required"));
        }
        if len < self.min_description_chars {
            return Err(Error::validation(format!(
                "description must be at least {} characters",
                self.min_description_chars
            )));
        }
        Ok(())
    }

    fn check_price(&self, price: f64) -> Result<(), Error> {
        if !price.is_finite() || price <= 0.0 {
            return Err(Error::validation("price must be greater than zero"));
        }
        if price > self.max_price {
            return Err(Error::validation(format!(
                "price must not exceed {}",
                self.max_price
            )));
        }
        Ok(())
    }

    fn check_images(&self, count: usize) -> Result<(), Error> {
        if count > self.max_images {
            return Err(Error::validation(format!(
                "at most {} images are allowed",
                self.max_images
            )));
        }
        Ok(())
    }
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]
mod tests {
    use super::*;

    fn valid_draft() -> ListingDraft {
        ListingDraft {
            title: "Quarto individual no Centro".to_string(),
            description: "Quarto mobiliado com internet e contas inclusas".to_string(),
            price: Some(450.0),
            images: vec!["https://img.example/1.jpg".to_string()],
            ..ListingDraft::default()
        }
    }

    fn reason(err: Error) -> String {
        match err {
            Error::Validation { reason } => reason,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_draft_passes() {
        ListingPolicy::default().validate_draft(&valid_draft()).unwrap();
    }

    #[test]
    fn title_bounds() {
        let policy = ListingPolicy::default();
        let draft = ListingDraft {
            title: "   ".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            reason(policy.validate_draft(&draft).unwrap_err()),
            "title is required"
        );

        let draft = ListingDraft {
            title: "Quarto".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            reason(policy.validate_draft(&draft).unwrap_err()),
            "title must be at least 10 characters"
        );

        let draft = ListingDraft {
            title: "x".repeat(101),
            ..valid_draft()
        };
        assert_eq!(
            reason(policy.validate_draft(&draft).unwrap_err()),
            "title must not exceed 100 characters"
        );
    }

    #[test]
    fn description_minimum() {
        let draft = ListingDraft {
            description: "Curta demais".to_string(),
            ..valid_draft()
        };
        assert_eq!(
            reason(ListingPolicy::default().validate_draft(&draft).unwrap_err()),
            "description must be at least 20 characters"
        );
    }

    #[test]
    fn price_must_be_positive_and_bounded() {
        let policy = ListingPolicy::default();
        for bad in [0.0, -10.0, f64::NAN, 1_000_001.0] {
            let draft = ListingDraft {
                price: Some(bad),
                ..valid_draft()
            };
            assert!(policy.validate_draft(&draft).is_err(), "{bad}");
        }
        let unpriced = ListingDraft {
            price: None,
            ..valid_draft()
        };
        policy.validate_draft(&unpriced).unwrap();
    }

    #[test]
    fn image_ceiling_comes_from_policy() {
        let draft = ListingDraft {
            images: vec!["img".to_string(); 15],
            ..valid_draft()
        };
        ListingPolicy::default().validate_draft(&draft).unwrap();

        let draft = ListingDraft {
            images: vec!["img".to_string(); 16],
            ..valid_draft()
        };
        assert_eq!(
            reason(ListingPolicy::default().validate_draft(&draft).unwrap_err()),
            "at most 15 images are allowed"
        );

        let strict = ListingPolicy {
            max_images: 5,
            ..ListingPolicy::default()
        };
        let draft = ListingDraft {
            images: vec!["img".to_string(); 6],
            ..valid_draft()
        };
        assert!(strict.validate_draft(&draft).is_err());
    }

    #[test]
    fn patch_validates_present_fields_only() {
        let policy = ListingPolicy::default();
        policy.validate_patch(&ListingPatch::default()).unwrap();

        let patch = ListingPatch {
            title: Some("curto".to_string()),
            ..ListingPatch::default()
        };
        assert!(policy.validate_patch(&patch).is_err());

        let patch = ListingPatch {
            price: Some(-1.0),
            ..ListingPatch::default()
        };
        assert!(policy.validate_patch(&patch).is_err());
    }

    #[test]
    fn normalize_trims_and_defaults_status() {
        let draft = ListingDraft {
            title: "  Quarto individual no Centro  ".to_string(),
            location: Some(" Centro ".to_string()),
            ..valid_draft()
        };
        let normalized = ListingPolicy::default().normalize_draft(draft);
        assert_eq!(normalized.title, "Quarto individual no Centro");
        assert_eq!(normalized.location.as_deref(), Some("Centro"));
        assert_eq!(normalized.status, Some(ListingStatus::Published));

        let draft = ListingDraft {
            status: Some(ListingStatus::Draft),
            ..valid_draft()
        };
        assert_eq!(
            ListingPolicy::default().normalize_draft(draft).status,
            Some(ListingStatus::Draft)
        );
    }

    #[test]
    fn normalize_patch_trims_present_text_only() {
        let patch = ListingPatch {
            title: Some("  Quarto reformado no Centro  ".to_string()),
            cep: Some(" 63900-000\n".to_string()),
            price: Some(400.0),
            ..ListingPatch::default()
        };
        let normalized = ListingPolicy::normalize_patch(patch);
        assert_eq!(normalized.title.as_deref(), Some("Quarto reformado no Centro"));
        assert_eq!(normalized.cep.as_deref(), Some("63900-000"));
        assert_eq!(normalized.price, Some(400.0));
        assert_eq!(normalized.description, None);
        assert_eq!(normalized.location, None);
    }

    #[test]
    fn policy_loads_partial_json() {
        let policy = ListingPolicy::from_json_str(r#"{ "max_images": 5 }"#).unwrap();
        assert_eq!(policy.max_images, 5);
        assert_eq!(policy.min_title_chars, 10);
        assert_eq!(policy.default_status, ListingStatus::Published);
    }
}
