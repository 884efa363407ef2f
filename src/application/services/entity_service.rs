//! Entity extraction service used by the post-creation flow.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::{PostEntities, PostEntity};
use crate::error::ExtractError;
use crate::extractor::EntityExtractor;

/// Service wrapping a shared [`EntityExtractor`].
///
/// Callers run [`Self::extract_for_post`] once when a post is created and
/// persist the rows as-is. Editing a post means extracting again and
/// replacing every stored row. [`Self::extract_grouped`] builds the
/// `hashtags`/`mentions`/`urls` view embedded in a post's representation.
#[derive(Debug, Clone)]
pub struct EntityService {
    extractor: Arc<EntityExtractor>,
}

impl EntityService {
    /// Creates a new entity service.
    pub fn new(extractor: Arc<EntityExtractor>) -> Self {
        Self { extractor }
    }

    /// Creates a service whose extractor follows `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(EntityExtractor::new(config.extractor())))
    }

    /// Extracts the entity rows for a newly created post.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MissingText`] if `text` is `None` and
    /// [`ExtractError::TextTooLong`] if the configured limit is exceeded.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn extract_for_post<'a, Id: Clone>(
        &self,
        post_id: Id,
        text: impl Into<Option<&'a str>>,
    ) -> Result<Vec<PostEntity<Id>>, ExtractError> {
        self.extractor.extract(post_id, text).inspect_err(|e| {
            tracing::warn!(error = %e, code = e.code(), "entity extraction rejected post text");
        })
    }

    /// Extracts entities and groups them by type.
    ///
    /// # Errors
    ///
    /// See [`Self::extract_for_post`].
    pub fn extract_grouped<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
    ) -> Result<PostEntities, ExtractError> {
        let entities = self.extract_for_post((), text)?;
        Ok(PostEntities::from_entities(&entities))
    }
}

impl Default for EntityService {
    fn default() -> Self {
        Self::new(Arc::new(EntityExtractor::default()))
    }
}
