pub mod mapping;

use serde::{Deserialize, Serialize};

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
pub enum ListingStatus {
    #[default]
    Draft,
    Published,
    Reserved,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDecision {
    Apply,
    Reject,
}

/// Finite state machine over [`ListingStatus`].
///
/// `Completed` is the only terminal state. `Cancelled` can be revived back
/// into `Draft` or straight to `Published`.
pub struct StatusLifecycle;

impl StatusLifecycle {
    /// Statuses reachable in one step from `status`, in display order.
    pub fn allowed_transitions(status: ListingStatus) -> &'static [ListingStatus] {
        match status {
            ListingStatus::Draft => &[ListingStatus::Published, ListingStatus::Cancelled],
            ListingStatus::Published => &[ListingStatus::Reserved, ListingStatus::Cancelled],
            ListingStatus::Reserved => &[ListingStatus::Completed, ListingStatus::Published],
            ListingStatus::Completed => &[],
            ListingStatus::Cancelled => &[ListingStatus::Draft, ListingStatus::Published],
        }
    }

    pub fn can_transition(from: ListingStatus, to: ListingStatus) -> bool {
        Self::allowed_transitions(from).contains(&to)
    }

    pub fn is_terminal(status: ListingStatus) -> bool {
        Self::allowed_transitions(status).is_empty()
    }

    pub fn decide_transition(from: ListingStatus, to: ListingStatus) -> TransitionDecision {
        if Self::can_transition(from, to) {
            TransitionDecision::Apply
        } else {
            TransitionDecision::Reject
        }
    }
}
