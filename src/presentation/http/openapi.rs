// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::favorite_sources::get_favorite_source_by_id,
        crate::presentation::http::controllers::favorite_sources::create_favorite_source,
        crate::presentation::http::controllers::favorite_sources::get_favorite_sources_from_query,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::favorite_sources::CreateFavoriteSourceRequest,
            crate::application::dto::FavoriteSourceDto,
            crate::application::dto::FavoriteSourceLookup
        )
    ),
    tags(
        (name = "Favorite Sources", description = "Favorite news sources per NewsAPI key"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "CatchUp Platform API",
        description = "CatchUp news platform backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URLS` (comma separated), keeping order and
/// dropping duplicates.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls = env::var("PUBLIC_API_URLS").unwrap_or_default();
        let mut seen = HashSet::new();
        for url in urls
            .split(',')
            .map(|segment| segment.trim().trim_end_matches('/'))
            .filter(|segment| !segment.is_empty())
        {
            if seen.insert(url.to_string()) {
                servers.push(Server::new(url));
            }
        }

        if servers.is_empty() {
            servers.push(Server::new("http://localhost:8080"));
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
