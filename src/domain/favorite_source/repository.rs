// src/domain/favorite_source/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::favorite_source::{
    entity::{FavoriteSource, NewFavoriteSource},
    value_objects::{FavoriteSourceId, NewsApiKey, SourceId},
};
use async_trait::async_trait;

#[async_trait]
pub trait FavoriteSourceRepository: Send + Sync {
    async fn find_by_id(&self, id: FavoriteSourceId) -> DomainResult<Option<FavoriteSource>>;

    async fn find_by_key(
        &self,
        news_api_key: &NewsApiKey,
        source_id: &SourceId,
    ) -> DomainResult<Option<FavoriteSource>>;

    /// Every favorite source registered under `news_api_key`, ordered by id.
    async fn find_all_by_news_api_key(
        &self,
        news_api_key: &NewsApiKey,
    ) -> DomainResult<Vec<FavoriteSource>>;

    /// Stages and commits the insert as a single unit of work.
    ///
    /// A violated `(news_api_key, source_id)` uniqueness constraint is reported as
    /// [`DomainError::Conflict`](crate::domain::errors::DomainError::Conflict).
    async fn add(&self, favorite_source: NewFavoriteSource) -> DomainResult<FavoriteSource>;
}
