//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion of
//! errors into HTTP responses. `AppError` is the single failure type returned by
//! services and controllers; expected failures (missing entities, invalid input,
//! duplicate relations) are variants of it and never panic. Every error is turned
//! into the `{ success: false, error }` response envelope.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::api::ApiResponse, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Requested entity is absent, or soft-deleted and excluded from the read.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or inconsistent input (unparsable date, self-relation, reference
    /// to a club that does not exist).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// The write collides with existing state, such as a relation that already exists.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Stored data is inconsistent in a way the caller cannot fix.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Server failed to bind or serve.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Maps a unique-constraint violation to `Conflict`, leaving other database
    /// errors untouched.
    pub fn conflict_on_unique(err: sea_orm::DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.into()),
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For every other variant, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, ApiResponse::error(msg)).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiResponse::error(msg)).into_response()
            }
            Self::Conflict(msg) => (StatusCode::CONFLICT, ApiResponse::error(msg)).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message so
/// implementation details do not leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::error("Internal server error"),
        )
            .into_response()
    }
}
