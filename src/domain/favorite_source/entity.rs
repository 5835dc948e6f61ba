// src/domain/favorite_source/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::favorite_source::value_objects::{FavoriteSourceId, NewsApiKey, SourceId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteSource {
    pub id: FavoriteSourceId,
    pub news_api_key: NewsApiKey,
    pub source_id: SourceId,
}

impl FavoriteSource {
    pub fn matches_key(&self, news_api_key: &NewsApiKey, source_id: &SourceId) -> bool {
        &self.news_api_key == news_api_key && &self.source_id == source_id
    }
}

/// A favorite source that has not been persisted yet and has no identity.
#[derive(Debug, Clone)]
pub struct NewFavoriteSource {
    pub news_api_key: NewsApiKey,
    pub source_id: SourceId,
}

impl NewFavoriteSource {
    pub fn new(news_api_key: NewsApiKey, source_id: SourceId) -> Self {
        Self {
            news_api_key,
            source_id,
        }
    }

    pub fn from_raw(
        news_api_key: impl Into<String>,
        source_id: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self::new(
            NewsApiKey::new(news_api_key)?,
            SourceId::new(source_id)?,
        ))
    }

    pub fn into_favorite_source(self, id: FavoriteSourceId) -> FavoriteSource {
        FavoriteSource {
            id,
            news_api_key: self.news_api_key,
            source_id: self.source_id,
        }
    }
}
