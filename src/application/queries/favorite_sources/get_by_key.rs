use super::FavoriteSourceQueryService;
use crate::{
    application::{
        dto::FavoriteSourceDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::favorite_source::{NewsApiKey, SourceId},
};

pub struct GetFavoriteSourceByKeyQuery {
    pub news_api_key: String,
    pub source_id: String,
}

impl FavoriteSourceQueryService {
    pub async fn get_favorite_source_by_key(
        &self,
        query: GetFavoriteSourceByKeyQuery,
    ) -> ApplicationResult<FavoriteSourceDto> {
        let news_api_key = NewsApiKey::new(query.news_api_key)?;
        let source_id = SourceId::new(query.source_id)?;
        let favorite_source = self
            .repo
            .find_by_key(&news_api_key, &source_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("favorite source not found"))?;
        Ok(favorite_source.into())
    }
}
