//! In-memory narrowing and ordering of listings.
//!
//! Nothing here mutates its input: filtering clones the passing listings and
//! both sorts return a fresh `Vec`.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::lifecycle::ListingStatus;
use crate::types::{Category, Listing};

/// Declarative filter. Absent fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingFilter {
    pub category: Option<Category>,
    /// Inclusive. Listings without a price are never excluded by it.
    pub min_price: Option<f64>,
    /// Inclusive. Listings without a price are never excluded by it.
    pub max_price: Option<f64>,
    /// Case-insensitive substring of `Listing::location`.
    pub location: Option<String>,
    pub bedrooms: Option<u32>,
    pub status: Option<ListingStatus>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(category) = self.category
            && listing.category != category
        {
            return false;
        }

        if let (Some(min), Some(price)) = (self.min_price, listing.price)
            && price < min
        {
            return false;
        }

        if let (Some(max), Some(price)) = (self.max_price, listing.price)
            && price > max
        {
            return false;
        }

        if let Some(needle) = self.location.as_deref().filter(|n| !n.is_empty()) {
            let needle = needle.to_lowercase();
            let found = listing
                .location
                .as_deref()
                .is_some_and(|loc| loc.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        if let Some(bedrooms) = self.bedrooms
            && listing.bedrooms != Some(bedrooms)
        {
            return false;
        }

        if let Some(status) = self.status
            && listing.status != status
        {
            return false;
        }

        true
    }
}

pub fn filter_listings(listings: &[Listing], filter: &ListingFilter) -> Vec<Listing> {
    let result: Vec<Listing> = listings
        .iter()
        .filter(|l| filter.matches(l))
        .cloned()
        .collect();
    tracing::debug!(
        total = listings.len(),
        matched = result.len(),
        "filtered listings"
    );
    result
}

/// Stable sort by price. Missing prices count as zero.
pub fn sort_by_price(listings: &[Listing], ascending: bool) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_prices(a.price.unwrap_or(0.0), b.price.unwrap_or(0.0));
        if ascending { ord } else { ord.reverse() }
    });
    sorted
}

/// Stable sort, most recent first. Missing or unparseable `created_at`
/// counts as the epoch, so those listings sink to the end.
pub fn sort_by_date(listings: &[Listing]) -> Vec<Listing> {
    let mut keyed: Vec<(i64, &Listing)> = listings
        .iter()
        .map(|l| (created_at_millis(l.created_at.as_deref()), l))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    keyed.into_iter().map(|(_, l)| l.clone()).collect()
}

fn compare_prices(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Milliseconds since the epoch. Accepts RFC 3339 and naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps (read as UTC).
pub fn created_at_millis(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return 0;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.and_utc().timestamp_millis();
        }
    }

    tracing::warn!(created_at = raw, "unparseable timestamp, sorting as epoch");
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(id: &str, price: Option<f64>, category: Category) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {id}"),
            price,
            category,
            ..Listing::default()
        }
    }

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    fn lcg_next(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        *state
    }

    #[test]
    fn empty_filter_passes_everything() {
        let listings = vec![
            make_listing("1", Some(300.0), Category::Rental),
            make_listing("2", None, Category::Other),
        ];
        let filter = ListingFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter_listings(&listings, &filter)), vec!["1", "2"]);
    }

    #[test]
    fn missing_price_passes_price_bounds() {
        let listings = vec![
            make_listing("cheap", Some(50.0), Category::Rental),
            make_listing("mid", Some(150.0), Category::Rental),
            make_listing("unpriced", None, Category::Rental),
            make_listing("pricey", Some(250.0), Category::Rental),
        ];
        let filter = ListingFilter {
            min_price: Some(100.0),
            max_price: Some(200.0),
            ..ListingFilter::default()
        };
        assert_eq!(
            ids(&filter_listings(&listings, &filter)),
            vec!["mid", "unpriced"]
        );
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let listings = vec![
            make_listing("low", Some(100.0), Category::Rental),
            make_listing("high", Some(200.0), Category::Rental),
        ];
        let filter = ListingFilter {
            min_price: Some(100.0),
            max_price: Some(200.0),
            ..ListingFilter::default()
        };
        assert_eq!(filter_listings(&listings, &filter).len(), 2);
    }

    #[test]
    fn location_is_a_case_insensitive_substring() {
        let mut centro = make_listing("1", None, Category::Rental);
        centro.location = Some("Centro, Quixadá".to_string());
        let mut campus = make_listing("2", None, Category::Rental);
        campus.location = Some("Campus".to_string());
        let nowhere = make_listing("3", None, Category::Rental);

        let filter = ListingFilter {
            location: Some("centro".to_string()),
            ..ListingFilter::default()
        };
        assert_eq!(
            ids(&filter_listings(&[centro, campus, nowhere], &filter)),
            vec!["1"]
        );
    }

    #[test]
    fn bedrooms_and_status_are_exact() {
        let mut two = make_listing("two", None, Category::Rental);
        two.bedrooms = Some(2);
        two.status = ListingStatus::Published;
        let mut unknown = make_listing("unknown", None, Category::Rental);
        unknown.status = ListingStatus::Published;
        let mut drafted = make_listing("drafted", None, Category::Rental);
        drafted.bedrooms = Some(2);

        let filter = ListingFilter {
            bedrooms: Some(2),
            status: Some(ListingStatus::Published),
            ..ListingFilter::default()
        };
        assert_eq!(
            ids(&filter_listings(&[two, unknown, drafted], &filter)),
            vec!["two"]
        );
    }

    #[test]
    fn each_criterion_rejects_on_its_own() {
        let mut listing = make_listing("1", Some(300.0), Category::Rental);
        listing.location = Some("Centro".to_string());
        listing.bedrooms = Some(1);
        listing.status = ListingStatus::Published;

        let rejecting = [
            ListingFilter {
                category: Some(Category::Other),
                ..ListingFilter::default()
            },
            ListingFilter {
                min_price: Some(300.01),
                ..ListingFilter::default()
            },
            ListingFilter {
                max_price: Some(299.99),
                ..ListingFilter::default()
            },
            ListingFilter {
                location: Some("campus".to_string()),
                ..ListingFilter::default()
            },
            ListingFilter {
                bedrooms: Some(2),
                ..ListingFilter::default()
            },
            ListingFilter {
                status: Some(ListingStatus::Draft),
                ..ListingFilter::default()
            },
        ];
        for filter in &rejecting {
            assert!(!filter.matches(&listing), "{filter:?}");
        }

        let accepting = ListingFilter {
            category: Some(Category::Rental),
            min_price: Some(300.0),
            max_price: Some(300.0),
            location: Some("CENTRO".to_string()),
            bedrooms: Some(1),
            status: Some(ListingStatus::Published),
        };
        assert!(accepting.matches(&listing));
    }

    #[test]
    fn filter_then_sort_puts_unpriced_first() {
        let listings = vec![
            make_listing("a", Some(300.0), Category::Rental),
            make_listing("b", Some(500.0), Category::Sale),
            make_listing("c", None, Category::Rental),
        ];
        let filter = ListingFilter {
            category: Some(Category::Rental),
            ..ListingFilter::default()
        };
        let result = sort_by_price(&filter_listings(&listings, &filter), true);
        assert_eq!(ids(&result), vec!["c", "a"]);
    }

    #[test]
    fn sorting_does_not_touch_the_input() {
        let listings = vec![
            make_listing("a", Some(300.0), Category::Rental),
            make_listing("b", Some(100.0), Category::Rental),
        ];
        let sorted = sort_by_price(&listings, true);
        assert_eq!(ids(&sorted), vec!["b", "a"]);
        assert_eq!(ids(&listings), vec!["a", "b"]);
    }

    #[test]
    fn price_sort_is_stable_in_both_directions() {
        let listings = vec![
            make_listing("x", Some(200.0), Category::Rental),
            make_listing("y", Some(100.0), Category::Rental),
            make_listing("z", Some(200.0), Category::Rental),
        ];
        assert_eq!(ids(&sort_by_price(&listings, true)), vec!["y", "x", "z"]);
        assert_eq!(ids(&sort_by_price(&listings, false)), vec!["x", "z", "y"]);
    }

    #[test]
    fn reversed_descending_sort_mirrors_ascending_prices() {
        let mut seed = 0xDEAD_BEEF_u64;
        for _ in 0..200 {
            let listings: Vec<Listing> = (0..20)
                .map(|i| {
                    let roll = lcg_next(&mut seed) % 12;
                    let price = (roll != 0).then(|| (roll * 50) as f64);
                    make_listing(&i.to_string(), price, Category::Rental)
                })
                .collect();

            let ascending = sort_by_price(&listings, true);
            let mut reversed = ascending.clone();
            reversed.reverse();
            let descending = sort_by_price(&reversed, false);

            let asc_prices: Vec<f64> = ascending.iter().map(|l| l.price.unwrap_or(0.0)).collect();
            let mut desc_prices: Vec<f64> =
                descending.iter().map(|l| l.price.unwrap_or(0.0)).collect();
            desc_prices.reverse();
            assert_eq!(asc_prices, desc_prices);
        }
    }

    #[test]
    fn date_sort_is_newest_first_with_missing_last() {
        let mut old = make_listing("old", None, Category::Rental);
        old.created_at = Some("2023-01-10T08:00:00Z".to_string());
        let mut new = make_listing("new", None, Category::Rental);
        new.created_at = Some("2024-06-01T08:00:00-03:00".to_string());
        let mut naive = make_listing("naive", None, Category::Rental);
        naive.created_at = Some("2024-02-15T10:30:00".to_string());
        let missing = make_listing("missing", None, Category::Rental);
        let mut garbage = make_listing("garbage", None, Category::Rental);
        garbage.created_at = Some("yesterday".to_string());

        let sorted = sort_by_date(&[missing, old, garbage, new, naive]);
        assert_eq!(
            ids(&sorted),
            vec!["new", "naive", "old", "missing", "garbage"]
        );
    }

    #[test]
    fn timestamp_parsing() {
        assert_eq!(created_at_millis(None), 0);
        assert_eq!(created_at_millis(Some("")), 0);
        assert_eq!(created_at_millis(Some("1970-01-01T00:00:01Z")), 1_000);
        assert_eq!(created_at_millis(Some("1970-01-01T00:00:01.500")), 1_500);
        assert_eq!(created_at_millis(Some("1970-01-01 00:00:02")), 2_000);
    }

    #[test]
    fn filter_deserializes_from_camel_case() {
        let filter: ListingFilter = serde_json::from_value(serde_json::json!({
            "category": "rental",
            "minPrice": 100,
            "location": "centro"
        }))
        .unwrap_or_default();
        assert_eq!(filter.category, Some(Category::Rental));
        assert_eq!(filter.min_price, Some(100.0));
        assert_eq!(filter.max_price, None);
        assert_eq!(filter.location.as_deref(), Some("centro"));
    }
}
