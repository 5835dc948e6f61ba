// src/presentation/http/controllers/favorite_sources.rs
use crate::application::{
    commands::favorite_sources::CreateFavoriteSourceCommand,
    dto::{FavoriteSourceDto, FavoriteSourceLookup},
    error::ApplicationError,
    ports::localization::NEWS_FAVORITE_SOURCE_DUPLICATED,
    queries::favorite_sources::{FindFavoriteSourcesQuery, GetFavoriteSourceByIdQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath, ApiQuery, RequestLocale};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, header},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const FAVORITE_SOURCES_PATH: &str = "/api/v1/favorite-sources";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteSourceRequest {
    pub news_api_key: String,
    pub source_id: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FavoriteSourceQueryParams {
    /// Owning client key. Required.
    #[serde(default)]
    pub news_api_key: Option<String>,
    /// Narrows the result to a single favorite source when present.
    #[serde(default)]
    pub source_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/favorite-sources/{id}",
    operation_id = "GetFavoriteSourceById",
    params(("id" = i64, Path, description = "Favorite source identifier")),
    responses(
        (status = 200, description = "Favorite source found.", body = FavoriteSourceDto),
        (status = 404, description = "Favorite source not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Favorite Sources"
)]
pub async fn get_favorite_source_by_id(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<FavoriteSourceDto>> {
    state
        .services
        .favorite_source_queries
        .get_favorite_source_by_id(GetFavoriteSourceByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/favorite-sources",
    operation_id = "CreateFavoriteSource",
    request_body = CreateFavoriteSourceRequest,
    responses(
        (status = 201, description = "Favorite source created.", body = FavoriteSourceDto,
            headers(("Location" = String, description = "URL of the created favorite source"))),
        (status = 400, description = "Invalid request.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Favorite source with this SourceId and NewsApiKey already exists.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Favorite Sources"
)]
pub async fn create_favorite_source(
    Extension(state): Extension<HttpState>,
    RequestLocale(locale): RequestLocale,
    ApiJson(payload): ApiJson<CreateFavoriteSourceRequest>,
) -> HttpResult<(StatusCode, [(header::HeaderName, String); 1], Json<FavoriteSourceDto>)> {
    let command = CreateFavoriteSourceCommand {
        news_api_key: payload.news_api_key,
        source_id: payload.source_id,
    };

    let created = match state
        .services
        .favorite_source_commands
        .create_favorite_source(command)
        .await
    {
        Ok(created) => created,
        Err(ApplicationError::Conflict(_)) => {
            let message = state
                .services
                .localizer()
                .localize(NEWS_FAVORITE_SOURCE_DUPLICATED, &locale);
            return Err(HttpError::conflict(message));
        }
        Err(err) => return Err(HttpError::from_error(err)),
    };

    let location = format!("{FAVORITE_SOURCES_PATH}/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/favorite-sources",
    operation_id = "GetFavoriteSourcesFromQuery",
    params(FavoriteSourceQueryParams),
    responses(
        (status = 200, description = "Favorite source, or every favorite source of the key when sourceId is omitted.", body = FavoriteSourceLookup),
        (status = 400, description = "Missing newsApiKey.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No favorite source for this newsApiKey and sourceId.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Favorite Sources"
)]
pub async fn get_favorite_sources_from_query(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<FavoriteSourceQueryParams>,
) -> HttpResult<Json<FavoriteSourceLookup>> {
    state
        .services
        .favorite_source_queries
        .find_favorite_sources(FindFavoriteSourcesQuery {
            news_api_key: params.news_api_key,
            source_id: params.source_id,
        })
        .await
        .into_http()
        .map(Json)
}
