#![allow(dead_code)]

use post_entities::domain::entities::{OffsetUnit, PostEntity, PostEntityType};

pub const POST_ID: i64 = 4_242;

pub fn hashtag(start: usize, end: usize, value: &str) -> PostEntity<i64> {
    PostEntity::new(POST_ID, PostEntityType::Hashtag, start, end, value)
}

pub fn mention(start: usize, end: usize, value: &str) -> PostEntity<i64> {
    PostEntity::new(POST_ID, PostEntityType::Mention, start, end, value)
}

pub fn url(start: usize, end: usize, value: &str) -> PostEntity<i64> {
    PostEntity::new(POST_ID, PostEntityType::Url, start, end, value)
}

/// Asserts every expected entity is present in `actual`.
pub fn assert_contains_all(actual: &[PostEntity<i64>], expected: &[PostEntity<i64>]) {
    for entity in expected {
        assert!(
            actual.contains(entity),
            "missing {entity} in {:?}",
            actual.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }
}

/// Asserts ordering, non-overlap, bounds and offset round-trip for one text.
pub fn assert_well_formed(text: &str, entities: &[PostEntity<i64>], unit: OffsetUnit) {
    for pair in entities.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "{} overlaps or precedes {}",
            pair[0],
            pair[1]
        );
    }

    for entity in entities {
        assert!(entity.start < entity.end, "empty span {entity}");

        let slice = entity
            .slice(text, unit)
            .unwrap_or_else(|| panic!("{entity} does not re-slice {text:?}"));

        match entity.entity_type {
            PostEntityType::Hashtag => assert_eq!(slice, format!("#{}", entity.value)),
            PostEntityType::Mention => assert_eq!(slice, format!("@{}", entity.value)),
            PostEntityType::Url => assert_eq!(slice, entity.value),
        }

        if entity.entity_type != PostEntityType::Url {
            assert!(
                entity
                    .value
                    .chars()
                    .next()
                    .is_some_and(|c| c == '_' || c.is_alphanumeric()),
                "body must start with a word char in {entity}"
            );
        }
    }
}
