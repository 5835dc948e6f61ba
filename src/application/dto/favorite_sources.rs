use crate::domain::favorite_source::FavoriteSource;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSourceDto {
    pub id: i64,
    pub news_api_key: String,
    pub source_id: String,
}

impl From<FavoriteSource> for FavoriteSourceDto {
    fn from(favorite_source: FavoriteSource) -> Self {
        Self {
            id: favorite_source.id.into(),
            news_api_key: favorite_source.news_api_key.into_inner(),
            source_id: favorite_source.source_id.into_inner(),
        }
    }
}

/// Outcome of a query-string lookup: an exact key yields one resource, a bare
/// `newsApiKey` yields every resource registered under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FavoriteSourceLookup {
    Single(FavoriteSourceDto),
    Many(Vec<FavoriteSourceDto>),
}
