use crate::lifecycle::ListingStatus;

/// Order of the happy-path progress indicator. `Cancelled` sits outside it.
pub const PROGRESS_FLOW: &[ListingStatus] = &[
    ListingStatus::Draft,
    ListingStatus::Published,
    ListingStatus::Reserved,
    ListingStatus::Completed,
];

/// Parses a status name, ignoring case and surrounding whitespace.
pub fn parse_status(raw: &str) -> Option<ListingStatus> {
    raw.trim().to_lowercase().parse::<ListingStatus>().ok()
}

/// Lenient status parsing for backend records.
///
/// Unknown or missing values fall back to [`ListingStatus::Draft`], the same
/// fallback the status badge uses, so a malformed record never hides a listing.
pub fn status_from_wire(raw: Option<&str>) -> ListingStatus {
    let Some(raw) = raw else {
        return ListingStatus::Draft;
    };
    parse_status(raw).unwrap_or_else(|| {
        tracing::warn!(status = raw, "unknown listing status, treating as draft");
        ListingStatus::Draft
    })
}

/// User-facing (pt-BR) label for a status.
pub fn status_label(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Draft => "Rascunho",
        ListingStatus::Published => "Publicado",
        ListingStatus::Reserved => "Reservado",
        ListingStatus::Completed => "Concluído",
        ListingStatus::Cancelled => "Cancelado",
    }
}

/// Zero-based position in [`PROGRESS_FLOW`], or `None` for cancelled listings.
pub fn progress_step(status: ListingStatus) -> Option<usize> {
    PROGRESS_FLOW.iter().position(|s| *s == status)
}

/// Human-readable display string for a transition, e.g. `"Publicado → Reservado"`.
pub fn transition_to_display(from: ListingStatus, to: ListingStatus) -> String {
    format!("{} → {}", status_label(from), status_label(to))
}
