// Request-scoped admin authorization.
//
// The reservations core performs no authentication; routes that read or
// rewrite history opt in by taking this extractor. No session state is kept
// anywhere: each request carries its own proof.

use axum::extract::FromRequestParts;
use axum::http::{StatusCode, header, request::Parts};

use crate::shell::state::AppState;

pub struct AdminContext;

impl FromRequestParts<AppState> for AdminContext {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Unconfigured token means nobody is an admin.
        let Some(expected) = state.admin_token.as_deref() else {
            return Err(StatusCode::UNAUTHORIZED);
        };
        let provided = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));
        match provided {
            Some(token) if token == expected => Ok(AdminContext),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }
}
