use serde::{Deserialize, Serialize};

use crate::lifecycle::ListingStatus;

/// Internal listing category tag.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Rental,
    Sale,
    Service,
    Other,
}

/// A listing record as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdDto {
    /// Backend-assigned numeric id.
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Postal code (CEP).
    #[serde(default)]
    pub cep: Option<String>,
    /// Monthly amount.
    #[serde(default)]
    pub price: Option<f64>,
    /// Numeric category bucket, see [`crate::mapping::category`]. Null,
    /// negative and unknown ids resolve to the fallback category.
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub rules: Option<Vec<String>>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub custom_rules: Option<String>,
    #[serde(default)]
    pub custom_amenities: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Raw status string; parsed leniently on the way in.
    #[serde(default)]
    pub status: Option<String>,
    /// Owning user id.
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A listing record as sent to the backend.
///
/// Every field is optional: absent fields are left out of the JSON body, so
/// the same shape serves creation (no `id`) and partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_amenities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
}

/// Internal listing representation: a cache of the last server view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// Opaque id assigned by the backend. Never changes after creation.
    pub id: String,
    pub title: String,
    pub description: String,
    pub seller: Option<String>,
    pub location: Option<String>,
    pub cep: Option<String>,
    pub price: Option<f64>,
    pub category: Category,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub rules: Vec<String>,
    pub amenities: Vec<String>,
    pub custom_rules: Option<String>,
    pub custom_amenities: Option<String>,
    pub images: Vec<String>,
    pub status: ListingStatus,
    /// Owner identifier (user id or email depending on the backend).
    #[serde(rename = "postedBy")]
    pub posted_by: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Input for creating a listing. The backend assigns `id` and owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub category: Category,
    pub seller: Option<String>,
    pub location: Option<String>,
    pub cep: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub rules: Vec<String>,
    pub amenities: Vec<String>,
    pub custom_rules: Option<String>,
    pub custom_amenities: Option<String>,
    pub images: Vec<String>,
    /// Initial status; the policy default applies when absent.
    pub status: Option<ListingStatus>,
}

/// Partial update. Only present fields are validated and submitted.
///
/// Status is not patchable; it changes only through
/// [`crate::repository::ListingService::change_status`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub seller: Option<String>,
    pub location: Option<String>,
    pub cep: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub rules: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub custom_rules: Option<String>,
    pub custom_amenities: Option<String>,
    pub images: Option<Vec<String>>,
}
