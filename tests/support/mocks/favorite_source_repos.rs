// tests/support/mocks/favorite_source_repos.rs
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use catchup_platform::domain::errors::{DomainError, DomainResult};
use catchup_platform::domain::favorite_source::{
    FavoriteSource, FavoriteSourceId, FavoriteSourceRepository, NewFavoriteSource, NewsApiKey,
    SourceId,
};

/* -------------------------------- InMemoryFavoriteSourceRepo -------------------------------- */

/// 一意制約付きのインメモリお気に入りソースリポジトリ
#[derive(Default)]
pub struct InMemoryFavoriteSourceRepo {
    inner: Mutex<Vec<FavoriteSource>>,
}

impl InMemoryFavoriteSourceRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<FavoriteSource>) -> Self {
        Self {
            inner: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl FavoriteSourceRepository for InMemoryFavoriteSourceRepo {
    async fn find_by_id(&self, id: FavoriteSourceId) -> DomainResult<Option<FavoriteSource>> {
        let records = self.inner.lock().unwrap();
        Ok(records.iter().find(|record| record.id == id).cloned())
    }

    async fn find_by_key(
        &self,
        news_api_key: &NewsApiKey,
        source_id: &SourceId,
    ) -> DomainResult<Option<FavoriteSource>> {
        let records = self.inner.lock().unwrap();
        Ok(records
            .iter()
            .find(|record| record.matches_key(news_api_key, source_id))
            .cloned())
    }

    async fn find_all_by_news_api_key(
        &self,
        news_api_key: &NewsApiKey,
    ) -> DomainResult<Vec<FavoriteSource>> {
        let records = self.inner.lock().unwrap();
        let mut matching: Vec<FavoriteSource> = records
            .iter()
            .filter(|record| &record.news_api_key == news_api_key)
            .cloned()
            .collect();
        matching.sort_by_key(|record| i64::from(record.id));
        Ok(matching)
    }

    async fn add(&self, favorite_source: NewFavoriteSource) -> DomainResult<FavoriteSource> {
        let mut records = self.inner.lock().unwrap();
        if records.iter().any(|record| {
            record.matches_key(&favorite_source.news_api_key, &favorite_source.source_id)
        }) {
            return Err(DomainError::Conflict("unique constraint violated".into()));
        }
        let next_id = records
            .iter()
            .map(|record| i64::from(record.id))
            .max()
            .unwrap_or(0)
            + 1;
        let created = favorite_source.into_favorite_source(FavoriteSourceId::new(next_id)?);
        records.push(created.clone());
        Ok(created)
    }
}

/* -------------------------------- BlindLookupFavoriteSourceRepo -------------------------------- */

/// 事前チェックをすり抜ける（並行リクエストを模擬する）リポジトリ
pub struct BlindLookupFavoriteSourceRepo {
    pub inner: Arc<InMemoryFavoriteSourceRepo>,
}

#[async_trait]
impl FavoriteSourceRepository for BlindLookupFavoriteSourceRepo {
    async fn find_by_id(&self, id: FavoriteSourceId) -> DomainResult<Option<FavoriteSource>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_key(
        &self,
        _news_api_key: &NewsApiKey,
        _source_id: &SourceId,
    ) -> DomainResult<Option<FavoriteSource>> {
        Ok(None)
    }

    async fn find_all_by_news_api_key(
        &self,
        news_api_key: &NewsApiKey,
    ) -> DomainResult<Vec<FavoriteSource>> {
        self.inner.find_all_by_news_api_key(news_api_key).await
    }

    async fn add(&self, favorite_source: NewFavoriteSource) -> DomainResult<FavoriteSource> {
        self.inner.add(favorite_source).await
    }
}

/* -------------------------------- FailingFavoriteSourceRepo -------------------------------- */

/// 書き込みが常に失敗するリポジトリ
pub struct FailingFavoriteSourceRepo;

#[async_trait]
impl FavoriteSourceRepository for FailingFavoriteSourceRepo {
    async fn find_by_id(&self, _id: FavoriteSourceId) -> DomainResult<Option<FavoriteSource>> {
        Ok(None)
    }

    async fn find_by_key(
        &self,
        _news_api_key: &NewsApiKey,
        _source_id: &SourceId,
    ) -> DomainResult<Option<FavoriteSource>> {
        Ok(None)
    }

    async fn find_all_by_news_api_key(
        &self,
        _news_api_key: &NewsApiKey,
    ) -> DomainResult<Vec<FavoriteSource>> {
        Ok(vec![])
    }

    async fn add(&self, _favorite_source: NewFavoriteSource) -> DomainResult<FavoriteSource> {
        Err(DomainError::Persistence("connection reset by peer".into()))
    }
}

/* ------------------------------ UnavailableFavoriteSourceRepo ------------------------------ */

pub const UNAVAILABLE_DB_DETAIL: &str = "password authentication failed for user \"postgres\"";

/// 読み取りも書き込みも失敗するリポジトリ
pub struct UnavailableFavoriteSourceRepo;

#[async_trait]
impl FavoriteSourceRepository for UnavailableFavoriteSourceRepo {
    async fn find_by_id(&self, _id: FavoriteSourceId) -> DomainResult<Option<FavoriteSource>> {
        Err(DomainError::Persistence(UNAVAILABLE_DB_DETAIL.into()))
    }

    async fn find_by_key(
        &self,
        _news_api_key: &NewsApiKey,
        _source_id: &SourceId,
    ) -> DomainResult<Option<FavoriteSource>> {
        Err(DomainError::Persistence(UNAVAILABLE_DB_DETAIL.into()))
    }

    async fn find_all_by_news_api_key(
        &self,
        _news_api_key: &NewsApiKey,
    ) -> DomainResult<Vec<FavoriteSource>> {
        Err(DomainError::Persistence(
            "relation \"favorite_sources\" does not exist".into(),
        ))
    }

    async fn add(&self, _favorite_source: NewFavoriteSource) -> DomainResult<FavoriteSource> {
        Err(DomainError::Persistence(UNAVAILABLE_DB_DETAIL.into()))
    }
}
