use auth::Authenticator;
use auth::TokenError;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use http::header;
use http::HeaderMap;
use thiserror::Error;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

const BEARER_SCHEME: &str = "Bearer";

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Missing Authorization header")]
    MissingToken,

    #[error("Invalid Authorization header format. Expected: Bearer <token>")]
    MalformedHeader,

    #[error("Invalid or expired token")]
    InvalidToken(TokenError),

    #[error("Invalid token subject")]
    InvalidSubject,
}

/// Resolve the caller's identity from the `Authorization` header.
///
/// Pure computation: nothing here touches a repository.
pub fn resolve_identity(
    headers: &HeaderMap,
    authenticator: &Authenticator,
) -> Result<AuthenticatedUser, IdentityError> {
    let token = extract_bearer_token(headers)?;

    let subject = authenticator
        .validate_token(token)
        .map_err(IdentityError::InvalidToken)?;

    let user_id = UserId::from_string(&subject).map_err(|_| IdentityError::InvalidSubject)?;

    Ok(AuthenticatedUser { user_id })
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, IdentityError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(IdentityError::MissingToken)?
        .to_str()
        .map_err(|_| IdentityError::MalformedHeader)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(IdentityError::MalformedHeader)?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) || token.is_empty() {
        return Err(IdentityError::MalformedHeader);
    }

    Ok(token)
}

/// Middleware that validates the bearer token and adds the caller to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = resolve_identity(req.headers(), &state.authenticator).map_err(|e| {
        tracing::warn!(
            error = %e,
            method = %req.method(),
            uri = %req.uri(),
            "Rejected unauthenticated request"
        );
        ApiError::Unauthorized(e.to_string())
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
