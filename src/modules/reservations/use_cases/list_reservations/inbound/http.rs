use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::auth::AdminContext;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListReservationsParams {
    pub date: Option<String>,
}

pub async fn handle(
    _admin: AdminContext,
    State(state): State<AppState>,
    Query(params): Query<ListReservationsParams>,
) -> impl IntoResponse {
    match state.listing.handle(params.date.as_deref()).await {
        Ok(records) => Json(records).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
