//! Static shared-secret bearer authentication.

use crate::app::server::AppState;
use crate::utils::error::{ProxyError, Result};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Checks an `Authorization` header value against the configured token.
///
/// The header must start with the literal `Bearer ` and the rest must equal
/// `expected_token` exactly.
pub fn verify_bearer(header: Option<&str>, expected_token: &str) -> Result<()> {
    let header =
        header.ok_or_else(|| ProxyError::unauthorized("Missing authorization header"))?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| ProxyError::unauthorized("Invalid authorization header format"))?;

    if token != expected_token {
        return Err(ProxyError::unauthorized("Invalid API key"));
    }

    Ok(())
}

/// Rejects the request with 401 before the handler runs if the bearer token
/// does not match.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    verify_bearer(header, &state.auth_token)?;
    Ok(next.run(request).await)
}
