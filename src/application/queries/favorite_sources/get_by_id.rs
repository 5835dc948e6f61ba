use super::FavoriteSourceQueryService;
use crate::{
    application::{
        dto::FavoriteSourceDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::favorite_source::FavoriteSourceId,
};

pub struct GetFavoriteSourceByIdQuery {
    pub id: i64,
}

impl FavoriteSourceQueryService {
    pub async fn get_favorite_source_by_id(
        &self,
        query: GetFavoriteSourceByIdQuery,
    ) -> ApplicationResult<FavoriteSourceDto> {
        // ids are assigned by the database and always positive
        let id = FavoriteSourceId::new(query.id)
            .map_err(|_| ApplicationError::not_found("favorite source not found"))?;
        let favorite_source = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("favorite source not found"))?;
        Ok(favorite_source.into())
    }
}
