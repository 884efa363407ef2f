//! Grouped view of a post's entities as embedded in the post representation.

use serde::{Deserialize, Serialize};

use super::post_entity::{PostEntity, PostEntityType};

/// A single span inside the grouped view, without post id or type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl<Id> From<&PostEntity<Id>> for EntitySpan {
    fn from(entity: &PostEntity<Id>) -> Self {
        Self {
            start: entity.start,
            end: entity.end,
            text: entity.value.clone(),
        }
    }
}

/// Entities of one post split by type.
///
/// Serializes as `{"hashtags": [...], "mentions": [...], "urls": [...]}`.
/// Within each group the extraction order (ascending `start`) is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntities {
    pub hashtags: Vec<EntitySpan>,
    pub mentions: Vec<EntitySpan>,
    pub urls: Vec<EntitySpan>,
}

impl PostEntities {
    /// Groups extracted entities by type.
    pub fn from_entities<Id>(entities: &[PostEntity<Id>]) -> Self {
        let mut grouped = Self::default();

        for entity in entities {
            let span = EntitySpan::from(entity);
            match entity.entity_type {
                PostEntityType::Hashtag => grouped.hashtags.push(span),
                PostEntityType::Mention => grouped.mentions.push(span),
                PostEntityType::Url => grouped.urls.push(span),
            }
        }

        grouped
    }

    /// Total number of spans across all groups.
    pub fn len(&self) -> usize {
        self.hashtags.len() + self.mentions.len() + self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
