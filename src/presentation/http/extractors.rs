// src/presentation/http/extractors.rs
use crate::{
    application::{error::ApplicationError, ports::localization::Locale},
    infrastructure::localization::negotiate_locale,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{FromRequest, FromRequestParts},
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};

use super::error::HttpError;

/// JSON body whose rejections are reported as `400 Bad Request` error bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// Path parameters whose rejections are reported as `404 Not Found` error bodies.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);

/// Query string whose rejections are reported as `400 Bad Request` error bodies.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct ApiQuery<T>(pub T);

/// Locale negotiated from `Accept-Language` against the configured catalogs.
#[derive(Debug, Clone)]
pub struct RequestLocale(pub Locale);

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());
        let localizer = app_state.services.localizer();

        Ok(Self(negotiate_locale(header, localizer.as_ref())))
    }
}
