//! Authenticated principal extraction.
//!
//! There is no real authentication layer; the principal is taken from the
//! `X-User-Id` header at the HTTP edge, with a demo fallback. Business
//! logic never hardcodes an identity; every operation receives the
//! principal explicitly.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the caller's identity.
pub const PRINCIPAL_HEADER: &str = "x-user-id";

/// Fallback identity for unauthenticated local/demo use. Applied only at
/// this extraction boundary.
pub const DEMO_PRINCIPAL: &str = "demo-user";

/// The caller's identity, threaded through every owner-scoped operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal(pub String);

impl Principal {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(DEMO_PRINCIPAL);
        Ok(Principal(principal.to_string()))
    }
}
