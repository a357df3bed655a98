//! REST client for the HR backend.
//!
//! [`ApiClient`] owns the HTTP connection pool and base URL and nothing else.
//! Credentials travel with each call inside a [`RequestContext`], so one
//! client can serve anonymous calls (login) and authenticated calls side by
//! side without any shared mutable header state.
//!
//! Each resource lives in its own module as an `impl ApiClient` block:
//!
//! - [`auth`]: login, logout, password change
//! - [`attendance`]: check-in/out, today's status, history, employee report
//! - [`users`], [`positions`], [`leave_types`], [`leaves`]: administration
//!
//! Every call returns [`ApiResult`]. A `401` is reported as
//! [`ApiError::Unauthorized`] so the session layer can sign the user out.

pub mod attendance;
pub mod auth;
pub mod client;
pub mod leave_types;
pub mod leaves;
pub mod positions;
pub mod users;

pub use client::ApiClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when an error response carries no usable `message` field.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The token is missing, expired or revoked.
    #[error("Unauthorized")]
    Unauthorized,
    /// Any other non-success status, with the server's message.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Rejections the user can fix by retyping credentials.
    pub fn is_client_error(&self) -> bool {
        match self {
            ApiError::Unauthorized => true,
            ApiError::Status { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Per-call credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    token: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Body of create, update, delete and reset responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: String,
}

/// Body of the user and position status toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub id: i64,
    #[serde(default)]
    pub message: String,
    pub is_active: bool,
}
