#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod favorites;
pub mod filter;
pub mod lifecycle;
pub mod mapping;
pub mod repository;
pub mod types;
pub mod validation;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;
pub use favorites::Favorites;
pub use filter::{ListingFilter, filter_listings, sort_by_date, sort_by_price};
pub use lifecycle::mapping::{
    parse_status, progress_step, status_from_wire, status_label, transition_to_display,
};
pub use lifecycle::{ListingStatus, StatusLifecycle, TransitionDecision};
pub use mapping::AdMapper;
pub use mapping::category::{category_from_id, category_id, category_id_for_tag};
pub use repository::{ListingRepository, ListingService, StatusChange};
pub use types::{AdDto, AdPayload, Category, Listing, ListingDraft, ListingPatch};
pub use validation::ListingPolicy;
