use super::FavoriteSourceQueryService;
use crate::{
    application::{dto::FavoriteSourceDto, error::ApplicationResult},
    domain::favorite_source::NewsApiKey,
};

pub struct GetAllFavoriteSourcesByNewsApiKeyQuery {
    pub news_api_key: String,
}

impl FavoriteSourceQueryService {
    pub async fn list_favorite_sources_by_news_api_key(
        &self,
        query: GetAllFavoriteSourcesByNewsApiKeyQuery,
    ) -> ApplicationResult<Vec<FavoriteSourceDto>> {
        let news_api_key = NewsApiKey::new(query.news_api_key)?;
        let records = self.repo.find_all_by_news_api_key(&news_api_key).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
