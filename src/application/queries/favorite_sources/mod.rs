mod find;
mod get_by_id;
mod get_by_key;
mod list_by_news_api_key;
mod service;

pub use find::FindFavoriteSourcesQuery;
pub use get_by_id::GetFavoriteSourceByIdQuery;
pub use get_by_key::GetFavoriteSourceByKeyQuery;
pub use list_by_news_api_key::GetAllFavoriteSourcesByNewsApiKeyQuery;
pub use service::FavoriteSourceQueryService;
