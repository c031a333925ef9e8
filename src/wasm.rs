use wasm_bindgen::prelude::*;

use crate::filter::{self, ListingFilter};
use crate::lifecycle::mapping;
use crate::lifecycle::StatusLifecycle;
use crate::mapping::AdMapper;
use crate::types::{AdDto, Listing};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

fn listings_from_js(value: JsValue) -> Result<Vec<Listing>, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| error_result(&format!("Invalid listings: {e}")))
}

/// Statuses reachable from `status`, or null for an unknown status.
///
/// Status names are matched the same way everywhere on this surface: case and
/// surrounding whitespace are ignored.
#[wasm_bindgen]
pub fn allowed_transitions(status: &str) -> JsValue {
    let Some(status) = mapping::parse_status(status) else {
        return JsValue::NULL;
    };
    let targets: Vec<&str> = StatusLifecycle::allowed_transitions(status)
        .iter()
        .map(|s| s.as_ref())
        .collect();
    to_js(&targets)
}

#[wasm_bindgen]
pub fn can_transition(from: &str, to: &str) -> bool {
    match (mapping::parse_status(from), mapping::parse_status(to)) {
        (Some(from), Some(to)) => StatusLifecycle::can_transition(from, to),
        _ => false,
    }
}

/// Badge label and progress position for a status. Unknown statuses render as draft.
#[wasm_bindgen]
pub fn status_badge(status: &str) -> JsValue {
    let status = mapping::status_from_wire(Some(status));
    to_js(&serde_json::json!({
        "status": status.as_ref(),
        "label": mapping::status_label(status),
        "step": mapping::progress_step(status),
        "terminal": StatusLifecycle::is_terminal(status),
    }))
}

/// Convert a backend record into the internal listing shape.
#[wasm_bindgen]
pub fn ad_to_listing(dto: JsValue) -> JsValue {
    match serde_wasm_bindgen::from_value::<AdDto>(dto) {
        Ok(dto) => to_js(&AdMapper::to_internal(dto)),
        Err(e) => error_result(&format!("Invalid ad record: {e}")),
    }
}

/// Convert an internal listing into a backend payload.
#[wasm_bindgen]
pub fn listing_to_ad(listing: JsValue) -> JsValue {
    match serde_wasm_bindgen::from_value::<Listing>(listing) {
        Ok(listing) => to_js(&AdMapper::to_wire(&listing)),
        Err(e) => error_result(&format!("Invalid listing: {e}")),
    }
}

#[wasm_bindgen]
pub fn filter_listings(listings: JsValue, criteria: JsValue) -> JsValue {
    let listings = match listings_from_js(listings) {
        Ok(l) => l,
        Err(e) => return e,
    };
    let criteria: ListingFilter = if criteria.is_undefined() || criteria.is_null() {
        ListingFilter::default()
    } else {
        match serde_wasm_bindgen::from_value(criteria) {
            Ok(f) => f,
            Err(e) => return error_result(&format!("Invalid filter: {e}")),
        }
    };
    to_js(&filter::filter_listings(&listings, &criteria))
}

#[wasm_bindgen]
pub fn sort_listings_by_price(listings: JsValue, ascending: bool) -> JsValue {
    match listings_from_js(listings) {
        Ok(l) => to_js(&filter::sort_by_price(&l, ascending)),
        Err(e) => e,
    }
}

#[wasm_bindgen]
pub fn sort_listings_by_date(listings: JsValue) -> JsValue {
    match listings_from_js(listings) {
        Ok(l) => to_js(&filter::sort_by_date(&l)),
        Err(e) => e,
    }
}
