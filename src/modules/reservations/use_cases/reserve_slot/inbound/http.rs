use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::reservations::use_cases::reserve_slot::command::ReserveSlot;
use crate::modules::reservations::use_cases::reserve_slot::handler::ApplicationError;
use crate::shared::infrastructure::reservation_log::ReserveOutcome;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReserveSlotBody {
    pub company: String,
    pub driver: String,
    pub phone: String,
    pub dock: String,
    pub date: String,
    pub time: String,
}

#[derive(Serialize)]
pub struct ConflictResponse {
    pub dock: String,
    pub date: String,
    pub time: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ReserveSlotBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = ReserveSlot {
        company: body.company,
        driver: body.driver,
        phone: body.phone,
        dock: body.dock,
        date: body.date,
        time: body.time,
        created_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    match state.reserve_handler.handle(command).await {
        Ok(ReserveOutcome::Committed(record)) => {
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Ok(ReserveOutcome::Conflict { dock, date, time }) => (
            StatusCode::CONFLICT,
            Json(ConflictResponse { dock, date, time }),
        )
            .into_response(),
        Err(ApplicationError::Domain(err)) => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(ApplicationError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
