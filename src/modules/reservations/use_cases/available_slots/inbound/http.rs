use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::reservations::use_cases::available_slots::handler::AvailabilityError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AvailableSlotsParams {
    pub dock: String,
    pub date: String,
}

#[derive(Serialize)]
pub struct AvailableSlotsResponse {
    pub dock: String,
    pub date: String,
    pub slots: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AvailableSlotsParams>,
) -> impl IntoResponse {
    match state.availability.handle(&params.dock, &params.date).await {
        Ok(slots) => Json(AvailableSlotsResponse {
            dock: params.dock.trim().to_string(),
            date: params.date.trim().to_string(),
            slots,
        })
        .into_response(),
        Err(AvailabilityError::UnknownDock(dock)) => (
            StatusCode::BAD_REQUEST,
            format!("unknown dock: {dock}"),
        )
            .into_response(),
        Err(AvailabilityError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
