use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::reservations::core::record::ReservationId;
use crate::modules::reservations::use_cases::cancel_reservation::command::CancelReservation;
use crate::shared::infrastructure::reservation_log::CancelOutcome;
use crate::shell::auth::AdminContext;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CancelReservationBody {
    /// Wire form `created_at|dock|date|time`.
    pub id: String,
}

pub async fn handle(
    _admin: AdminContext,
    State(state): State<AppState>,
    body: Result<Json<CancelReservationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let id = match body.id.parse::<ReservationId>() {
        Ok(id) => id,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    match state.cancel_handler.handle(CancelReservation { id }).await {
        Ok(CancelOutcome::Cancelled(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(CancelOutcome::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
