//! # Wallet Web Errors
//!
//! - [`ProviderError`] - a single `provider.request(...)` call failed
//! - [`ConnectError`] - why a [`connect_wallet`](crate::services::connect::connect_wallet)
//!   attempt did not reach the connected state
//! - [`PageError`] - the page could not be bound to the DOM at startup

use shared::dto::provider::{ProviderMethod, ProviderRpcError};
use thiserror::Error;

/// Failure of one provider request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The provider rejected with an EIP-1193 error object.
    #[error("{0}")]
    Rpc(ProviderRpcError),

    /// The provider threw something that is not an EIP-1193 error.
    #[error("provider threw: {0}")]
    Thrown(String),

    /// The request resolved but the value had the wrong shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Stable tag for the failure variants, used by callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    ProviderMissing,
    UserRejected,
    ProviderFailure,
    MalformedResponse,
    NoAccounts,
}

/// Result tag of a failed connection attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConnectError {
    #[error("no injected wallet provider found")]
    ProviderMissing,

    #[error("{method} request failed: {source}")]
    Request {
        method: ProviderMethod,
        source: ProviderError,
    },

    #[error("wallet returned no accounts")]
    NoAccounts,
}

impl ConnectError {
    pub fn reason(&self) -> FailureReason {
        match self {
            ConnectError::ProviderMissing => FailureReason::ProviderMissing,
            ConnectError::NoAccounts => FailureReason::NoAccounts,
            ConnectError::Request { source, .. } => match source {
                ProviderError::Rpc(err) if err.is_user_rejection() => FailureReason::UserRejected,
                ProviderError::Rpc(_) | ProviderError::Thrown(_) => FailureReason::ProviderFailure,
                ProviderError::Malformed(_) => FailureReason::MalformedResponse,
            },
        }
    }
}

/// Errors binding the connect page to the document.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{0} is not an HtmlElement")]
    NotHtmlElement(String),

    #[error("failed to attach click listener: {0}")]
    Listener(String),
}
