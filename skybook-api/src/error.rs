use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skybook_core::CoreError;
use skybook_order::{BookingError, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("{0}")]
    ConflictError(String),
    #[error(transparent)]
    BookingRejected(BookingError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::BookingRejected(err) => {
                let body = match &err {
                    BookingError::SeatCountMismatch { required, selected } => json!({
                        "error": err.to_string(),
                        "required": required,
                        "selected": selected,
                    }),
                    BookingError::MissingField(field) => json!({
                        "error": err.to_string(),
                        "field": field,
                    }),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejections come back as `AppError`, so a
/// malformed body gets the same 400 `{"error": ...}` shape as a failed check.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => AppError::ValidationError(msg),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) | SessionError::FlightNotOffered(_) => AppError::NotFoundError(err.to_string()),
            SessionError::InvalidStep { .. } => AppError::ConflictError(err.to_string()),
            SessionError::Booking(e) => AppError::BookingRejected(e),
        }
    }
}
