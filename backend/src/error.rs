use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::Error;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
    #[error(transparent)]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Common(err) = &self {
            match err.root() {
                Error::Validation(errors) => {
                    return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
                }
                Error::UserNameTaken => {
                    return (StatusCode::CONFLICT, err.root().to_string()).into_response();
                }
                Error::InvalidCredentials => {
                    return (StatusCode::UNAUTHORIZED, err.root().to_string()).into_response();
                }
                _ => {}
            }
        }

        error!("Request failed: {self}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error processing the request",
        )
            .into_response()
    }
}
