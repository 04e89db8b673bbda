use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::reservations::use_cases::available_slots::inbound::http as available_http;
use crate::modules::reservations::use_cases::cancel_reservation::inbound::http as cancel_http;
use crate::modules::reservations::use_cases::list_reservations::inbound::http as list_http;
use crate::modules::reservations::use_cases::reserve_slot::inbound::http as reserve_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/available-slots", get(available_http::handle))
        .route(
            "/reservations",
            post(reserve_http::handle).get(list_http::handle),
        )
        .route("/reservations/cancel", post(cancel_http::handle))
        .with_state(state)
}
