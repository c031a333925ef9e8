//! Category lookup tables between wire ids and internal tags.
//!
//! The two directions are maintained independently and are not inverses:
//! every wire id from 1 to 4 collapses into `rental`, while the tag table also
//! knows the property-kind tags used by the other backend integration. A
//! listing tagged `sale` goes out as id 1 and comes back as `rental`.

use crate::types::Category;

pub const FALLBACK_CATEGORY: Category = Category::Rental;
pub const FALLBACK_CATEGORY_ID: u32 = 1;

/// Wire id to internal tag. Many-to-one.
pub const ID_TO_CATEGORY: &[(i64, Category)] = &[
    (1, Category::Rental),
    (2, Category::Rental),
    (3, Category::Rental),
    (4, Category::Rental),
    (5, Category::Other),
];

/// Tag to wire id. Includes property-kind tags that have no [`Category`].
pub const TAG_TO_CATEGORY_ID: &[(&str, u32)] = &[
    ("apartment", 1),
    ("house", 2),
    ("studio", 3),
    ("room", 4),
    ("residential", 5),
    ("rental", 1),
    ("sale", 1),
    ("service", 5),
    ("other", 5),
];

/// Resolves a wire id, falling back to `rental` for missing, null, negative
/// or otherwise unknown ids.
pub fn category_from_id(category_id: Option<i64>) -> Category {
    if let Some(wanted) = category_id
        && let Some((_, category)) = ID_TO_CATEGORY.iter().find(|(id, _)| *id == wanted)
    {
        return *category;
    }
    tracing::warn!(?category_id, "unknown category id, falling back to rental");
    FALLBACK_CATEGORY
}

/// Resolves a tag (case-insensitive), falling back to id 1 for unknown tags.
pub fn category_id_for_tag(tag: &str) -> u32 {
    let slug = tag.trim().to_lowercase();
    if let Some((_, id)) = TAG_TO_CATEGORY_ID.iter().find(|(t, _)| *t == slug) {
        return *id;
    }
    tracing::warn!(tag, "unknown category tag, falling back to id 1");
    FALLBACK_CATEGORY_ID
}

pub fn category_id(category: Category) -> u32 {
    category_id_for_tag(category.as_ref())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn wire_ids_resolve_through_the_table() {
        assert_eq!(category_from_id(Some(1)), Category::Rental);
        assert_eq!(category_from_id(Some(2)), Category::Rental);
        assert_eq!(category_from_id(Some(3)), Category::Rental);
        assert_eq!(category_from_id(Some(4)), Category::Rental);
        assert_eq!(category_from_id(Some(5)), Category::Other);
    }

    #[test]
    fn unknown_wire_ids_fall_back_to_rental() {
        assert_eq!(category_from_id(None), Category::Rental);
        assert_eq!(category_from_id(Some(0)), Category::Rental);
        assert_eq!(category_from_id(Some(-1)), Category::Rental);
        assert_eq!(category_from_id(Some(6)), Category::Rental);
        assert_eq!(category_from_id(Some(i64::MIN)), Category::Rental);
    }

    #[test]
    fn tags_resolve_through_the_table() {
        assert_eq!(category_id_for_tag("apartment"), 1);
        assert_eq!(category_id_for_tag("house"), 2);
        assert_eq!(category_id_for_tag("studio"), 3);
        assert_eq!(category_id_for_tag("room"), 4);
        assert_eq!(category_id_for_tag("residential"), 5);
        assert_eq!(category_id_for_tag("Service"), 5);
        assert_eq!(category_id_for_tag("  HOUSE "), 2);
    }

    #[test]
    fn unknown_tags_fall_back_to_id_one() {
        assert_eq!(category_id_for_tag("castle"), 1);
        assert_eq!(category_id_for_tag(""), 1);
    }

    #[test]
    fn every_category_has_a_tag_entry() {
        for category in Category::iter() {
            assert!(
                TAG_TO_CATEGORY_ID
                    .iter()
                    .any(|(tag, _)| *tag == category.as_ref()),
                "{category}"
            );
        }
    }

    #[test]
    fn tables_are_not_inverses() {
        let round_trips: Vec<(Category, Category)> = Category::iter()
            .map(|c| (c, category_from_id(Some(i64::from(category_id(c))))))
            .collect();
        assert_eq!(
            round_trips,
            vec![
                (Category::Rental, Category::Rental),
                (Category::Sale, Category::Rental),
                (Category::Service, Category::Other),
                (Category::Other, Category::Other),
            ]
        );
    }
}
