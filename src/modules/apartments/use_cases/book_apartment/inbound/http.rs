use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::apartments::application::errors::ApplicationError;
use crate::modules::apartments::core::errors::DomainError;
use crate::modules::apartments::use_cases::book_apartment::command::BookApartment;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct BookApartmentBody {
    pub tenant_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Serialize)]
pub struct BookApartmentResponse {
    pub booking_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(apartment_id): Path<String>,
    body: Result<Json<BookApartmentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = BookApartment {
        apartment_id,
        tenant_id: body.tenant_id,
        start: body.start,
        end: body.end,
    };

    match state.apartment_service.book(command).await {
        Ok(booking_id) => (
            StatusCode::CREATED,
            Json(BookApartmentResponse { booking_id }),
        )
            .into_response(),
        Err(error) => {
            let status = status_for(&error);
            if status.is_server_error() {
                tracing::error!(%error, "failed to book apartment");
            }
            status.into_response()
        }
    }
}

fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::ApartmentNotFound(_) => StatusCode::NOT_FOUND,
        // A stored apartment without identity is a storage fault, not a bad request.
        ApplicationError::Domain(DomainError::NotPersisted) => StatusCode::INTERNAL_SERVER_ERROR,
        ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
