//! Failure taxonomy for the students API.
//!
//! Every fallible path in the crate funnels into [`Error`], one variant per
//! failure kind, so the dispatcher answers each kind with a distinct HTTP
//! status instead of collapsing everything into a blanket server error.

use lambda_http::http;
use std::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the students API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request carried no usable student identifier.
    #[error("student id not provided")]
    IdNotProvided,

    /// The request body could not be parsed as a student record.
    #[error("invalid student payload: {message}")]
    InvalidBody {
        /// Description of the parse failure.
        message: String,
    },

    /// The HTTP method maps to no operation.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No record exists under the requested identifier.
    #[error("no student found for id {id}")]
    NotFound {
        /// The identifier that missed.
        id: String,
    },

    /// The backing table rejected or failed the operation.
    #[error("student table error: {message}")]
    Store {
        /// Message reported by the table client.
        message: String,
    },
}

impl Error {
    /// The HTTP status the dispatcher answers this failure kind with.
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::IdNotProvided | Self::InvalidBody { .. } => http::StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::NotFound { .. } => http::StatusCode::NOT_FOUND,
            Self::Store { .. } => http::StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody {
            message: err.to_string(),
        }
    }
}

impl From<serde_dynamo::Error> for Error {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }
}

impl<E, R> From<aws_sdk_dynamodb::error::SdkError<E, R>> for Error
where
    E: std::error::Error + 'static,
    R: fmt::Debug,
{
    fn from(err: aws_sdk_dynamodb::error::SdkError<E, R>) -> Self {
        Self::Store {
            message: aws_sdk_dynamodb::error::DisplayErrorContext(&err).to_string(),
        }
    }
}
