use axum::http::StatusCode;
use std::fmt;

/// Why a single backend round trip did not produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    Status(u16),
    Transport(String),
    Body(String),
}

impl RequestFailure {
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn body(err: impl std::error::Error) -> Self {
        Self::Body(err.to_string())
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "backend responded with status {code}"),
            Self::Transport(message) => write!(f, "network error: {message}"),
            Self::Body(message) => write!(f, "unexpected response body: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    ReportFetch(RequestFailure),
    Recognition(RequestFailure),
    SaveNetwork(RequestFailure),
    Water(RequestFailure),
    Profile(RequestFailure),
}

impl ClientError {
    pub fn failure(&self) -> &RequestFailure {
        match self {
            Self::ReportFetch(failure)
            | Self::Recognition(failure)
            | Self::SaveNetwork(failure)
            | Self::Water(failure)
            | Self::Profile(failure) => failure,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReportFetch(failure) => write!(f, "daily report fetch failed: {failure}"),
            Self::Recognition(failure) => write!(f, "meal recognition failed: {failure}"),
            Self::SaveNetwork(failure) => write!(f, "meal save failed: {failure}"),
            Self::Water(failure) => write!(f, "water intake request failed: {failure}"),
            Self::Profile(failure) => write!(f, "profile request failed: {failure}"),
        }
    }
}

impl std::error::Error for ClientError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        Self::bad_gateway(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
