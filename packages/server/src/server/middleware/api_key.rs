use axum::extract::{Extension, Request};
use axum::http::{header::AUTHORIZATION, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::server::app::AppState;

/// Static API-key guard for the directory routes.
///
/// With no key configured the API is open. A missing `Authorization`
/// header is 401; a mismatched key is 403.
pub async fn require_api_key(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.api_key.as_deref() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match provided {
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "API key is missing" })),
        )
            .into_response(),
        Some(key) if key != expected => (
            StatusCode::FORBIDDEN,
            Json(json!({ "detail": "Invalid API key" })),
        )
            .into_response(),
        Some(_) => next.run(request).await,
    }
}
