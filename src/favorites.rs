use serde::{Deserialize, Serialize};

use crate::types::Listing;

/// Ordered, duplicate-free set of favorite listing ids.
///
/// Serializes as a plain JSON array of ids so callers can persist it wherever
/// they keep local state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, listing_id: &str) -> bool {
        self.ids.iter().any(|id| id == listing_id)
    }

    /// Adds the id if absent, removes it otherwise. Returns whether it is now
    /// a favorite.
    pub fn toggle(&mut self, listing_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == listing_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(listing_id.to_string());
            true
        }
    }

    /// Favorite listings from `listings`, in the order they appear there.
    pub fn select<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.contains(&l.id)).collect()
    }
}

impl From<Vec<String>> for Favorites {
    fn from(ids: Vec<String>) -> Self {
        let mut favorites = Self::default();
        for id in ids {
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }
}

impl From<Favorites> for Vec<String> {
    fn from(favorites: Favorites) -> Self {
        favorites.ids
    }
}
