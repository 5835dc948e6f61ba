// src/infrastructure/repositories/postgres_favorite_source.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favorite_source::{
    FavoriteSource, FavoriteSourceId, FavoriteSourceRepository, NewFavoriteSource, NewsApiKey,
    SourceId,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresFavoriteSourceRepository {
    pool: PgPool,
}

impl PostgresFavoriteSourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FavoriteSourceRow {
    id: i64,
    news_api_key: String,
    source_id: String,
}

impl TryFrom<FavoriteSourceRow> for FavoriteSource {
    type Error = DomainError;

    fn try_from(row: FavoriteSourceRow) -> Result<Self, Self::Error> {
        Ok(FavoriteSource {
            id: FavoriteSourceId::new(row.id)?,
            news_api_key: NewsApiKey::new(row.news_api_key)?,
            source_id: SourceId::new(row.source_id)?,
        })
    }
}

#[async_trait]
impl FavoriteSourceRepository for PostgresFavoriteSourceRepository {
    async fn find_by_id(&self, id: FavoriteSourceId) -> DomainResult<Option<FavoriteSource>> {
        let row = sqlx::query_as::<_, FavoriteSourceRow>(
            "SELECT id, news_api_key, source_id FROM favorite_sources WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(FavoriteSource::try_from).transpose()
    }

    async fn find_by_key(
        &self,
        news_api_key: &NewsApiKey,
        source_id: &SourceId,
    ) -> DomainResult<Option<FavoriteSource>> {
        let row = sqlx::query_as::<_, FavoriteSourceRow>(
            "SELECT id, news_api_key, source_id
             FROM favorite_sources WHERE news_api_key = $1 AND source_id = $2",
        )
        .bind(news_api_key.as_str())
        .bind(source_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(FavoriteSource::try_from).transpose()
    }

    async fn find_all_by_news_api_key(
        &self,
        news_api_key: &NewsApiKey,
    ) -> DomainResult<Vec<FavoriteSource>> {
        let rows = sqlx::query_as::<_, FavoriteSourceRow>(
            "SELECT id, news_api_key, source_id
             FROM favorite_sources WHERE news_api_key = $1 ORDER BY id",
        )
        .bind(news_api_key.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(FavoriteSource::try_from).collect()
    }

    async fn add(&self, favorite_source: NewFavoriteSource) -> DomainResult<FavoriteSource> {
        let NewFavoriteSource {
            news_api_key,
            source_id,
        } = favorite_source;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, FavoriteSourceRow>(
            "INSERT INTO favorite_sources (news_api_key, source_id)
             VALUES ($1, $2)
             RETURNING id, news_api_key, source_id",
        )
        .bind(news_api_key.as_str())
        .bind(source_id.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        FavoriteSource::try_from(row)
    }
}
