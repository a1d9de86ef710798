// ── Core error types ──
//
// User-facing errors from custbook-core. Consumers never see reqwest or
// serde errors directly; `From<custbook_api::Error>` folds them into the
// validation / transport / not-found taxonomy.

use thiserror::Error;

use crate::model::AddressIndexError;
use crate::validation::ValidationError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Local, pre-request ───────────────────────────────────────────
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    AddressIndex(#[from] AddressIndexError),

    #[error("Customer ID is missing")]
    MissingId,

    #[error("Customer data is not loaded")]
    NotLoaded,

    #[error("A submission is already in progress")]
    SubmitInFlight,

    // ── Remote store ─────────────────────────────────────────────────
    #[error("Customer not found: {identifier}")]
    NotFound { identifier: String },

    #[error("Cannot reach customer service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to customer service timed out")]
    Timeout,

    /// Non-success status or unreadable response.
    #[error("Request failed: {message}")]
    Transport {
        message: String,
        /// HTTP status code (if the server answered).
        status: Option<u16>,
    },

    // ── Lifecycle ────────────────────────────────────────────────────
    /// The owning view was unmounted; the result was discarded.
    #[error("Request cancelled")]
    Cancelled,

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for failures that happened before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::AddressIndex(_)
                | Self::MissingId
                | Self::NotLoaded
                | Self::SubmitInFlight
        )
    }

    /// Returns `true` for any failure reported by, or on the way to, the remote store.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::Timeout | Self::Transport { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<custbook_api::Error> for CoreError {
    fn from(err: custbook_api::Error) -> Self {
        match err {
            custbook_api::Error::NotFound { path } => CoreError::NotFound {
                identifier: path.rsplit('/').next().unwrap_or_default().to_owned(),
            },
            custbook_api::Error::Transport(ref e) => {
                if err.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Transport {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            custbook_api::Error::Api { status, message } => CoreError::Transport {
                message,
                status: Some(status),
            },
            custbook_api::Error::Deserialization { message, body: _ } => CoreError::Transport {
                message: format!("unreadable response: {message}"),
                status: None,
            },
            custbook_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid API URL: {e}"),
            },
            custbook_api::Error::Tls(message) => CoreError::Config { message },
        }
    }
}
