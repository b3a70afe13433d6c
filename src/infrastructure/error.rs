use crate::core::response::DecisionResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use strum::{AsRefStr, Display, EnumString};

pub type AppResult<T = ()> = Result<T, AppError>;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Closed classification of every failure the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
pub enum ErrorKind {
    InvalidLoanAmount,
    InvalidLoanPeriod,
    InvalidIdentityCode,
    InvalidAge,
    NoValidLoan,
    InvalidPayload,
    Unexpected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AgeViolation {
    #[strum(to_string = "Age is below allowed for loan application!")]
    BelowMinimum,
    #[strum(to_string = "Age is above allowed for loan application!")]
    AboveMaximum,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidLoanAmount(String),
    #[error("{0}")]
    InvalidLoanPeriod(String),
    #[error("{0}")]
    InvalidPersonalCode(String),
    #[error("{0}")]
    InvalidAge(AgeViolation),
    #[error("{0}")]
    NoValidLoan(String),
    #[error("{0}")]
    InvalidPayloadError(String),
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),
    #[error("{0}")]
    InvalidConfigError(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    Unexpected(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidLoanAmount(_) => ErrorKind::InvalidLoanAmount,
            AppError::InvalidLoanPeriod(_) => ErrorKind::InvalidLoanPeriod,
            AppError::InvalidPersonalCode(_) => ErrorKind::InvalidIdentityCode,
            AppError::InvalidAge(_) => ErrorKind::InvalidAge,
            AppError::NoValidLoan(_) => ErrorKind::NoValidLoan,
            AppError::InvalidPayloadError(_) => ErrorKind::InvalidPayload,
            AppError::ConfigError(_)
            | AppError::InvalidConfigError(_)
            | AppError::IoError(_)
            | AppError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidLoanAmount
            | ErrorKind::InvalidLoanPeriod
            | ErrorKind::InvalidIdentityCode
            | ErrorKind::InvalidAge
            | ErrorKind::InvalidPayload => StatusCode::BAD_REQUEST,
            ErrorKind::NoValidLoan => StatusCode::NOT_FOUND,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to a client. Internal failures never leak their detail.
    pub fn client_message(&self) -> String {
        match self.kind() {
            ErrorKind::Unexpected => UNEXPECTED_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed with internal error: {self:?}");
        }
        let body = DecisionResponse {
            loan_amount: None,
            loan_period: None,
            error_message: Some(self.client_message()),
        };
        (status, Json(body)).into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidPayloadError(rejection.body_text())
    }
}
