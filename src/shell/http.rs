use axum::{Router, routing::post};

use crate::modules::apartments::use_cases::add_apartment::inbound::http as add_http;
use crate::modules::apartments::use_cases::book_apartment::inbound::http as book_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/apartments", post(add_http::handle))
        .route("/apartments/{apartment_id}/bookings", post(book_http::handle))
        .with_state(state)
}
