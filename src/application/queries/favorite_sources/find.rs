use super::{
    FavoriteSourceQueryService, GetAllFavoriteSourcesByNewsApiKeyQuery,
    GetFavoriteSourceByKeyQuery,
};
use crate::application::{
    dto::FavoriteSourceLookup,
    error::{ApplicationError, ApplicationResult},
};

/// Query-string driven lookup. `source_id` narrows the result to one resource.
pub struct FindFavoriteSourcesQuery {
    pub news_api_key: Option<String>,
    pub source_id: Option<String>,
}

impl FavoriteSourceQueryService {
    pub async fn find_favorite_sources(
        &self,
        query: FindFavoriteSourcesQuery,
    ) -> ApplicationResult<FavoriteSourceLookup> {
        let news_api_key = query
            .news_api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("newsApiKey is required"))?;

        match query.source_id.filter(|source| !source.is_empty()) {
            Some(source_id) => self
                .get_favorite_source_by_key(GetFavoriteSourceByKeyQuery {
                    news_api_key,
                    source_id,
                })
                .await
                .map(FavoriteSourceLookup::Single),
            None => self
                .list_favorite_sources_by_news_api_key(GetAllFavoriteSourcesByNewsApiKeyQuery {
                    news_api_key,
                })
                .await
                .map(FavoriteSourceLookup::Many),
        }
    }
}
