//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use custbook_config::ConfigError;
use custbook_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const INTERRUPTED: i32 = 130;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the customer service at {url}")]
    #[diagnostic(
        code(custbook::connection_failed),
        help(
            "Check that the service is running and reachable.\n\
             Override the address with --api-url or: custbook config set api_url <URL>"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(custbook::timeout),
        help("Increase the timeout with --timeout <SECONDS> (0 waits indefinitely).")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(custbook::not_found),
        help("Run: custbook {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error ({}): {message}", .status.map_or_else(|| "no status".to_owned(), |s| s.to_string()))]
    #[diagnostic(code(custbook::api_error))]
    ApiError { status: Option<u16>, message: String },

    // ── Screen outcome ───────────────────────────────────────────────
    /// A screen's user-facing message wrapping the underlying cause.
    #[error("{message}")]
    #[diagnostic(code(custbook::failed))]
    Screen {
        message: String,
        #[source]
        cause: Box<CliError>,
    },

    #[error("{message}")]
    #[diagnostic(code(custbook::state))]
    State { message: String },

    // ── Validation ───────────────────────────────────────────────────
    /// A field rule failed; nothing was sent.
    #[error("{message}")]
    #[diagnostic(
        code(custbook::invalid_input),
        help("Nothing was sent to the server. Fix the input and try again.")
    )]
    InvalidInput { message: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(custbook::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(custbook::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: custbook config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(
        code(custbook::config),
        help("Inspect the active configuration with: custbook config show")
    )]
    Config(Box<ConfigError>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Interrupted")]
    #[diagnostic(code(custbook::interrupted))]
    Interrupted,

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidInput { .. } | Self::Validation { .. } | Self::ProfileNotFound { .. } => {
                exit_code::USAGE
            }
            Self::Screen { cause, .. } => cause.exit_code(),
            Self::Interrupted => exit_code::INTERRUPTED,
            Self::ApiError { .. } | Self::State { .. } | Self::Config(_) | Self::Io(_) => {
                exit_code::GENERAL
            }
        }
    }

    /// Prefer a screen's own message, keeping `err` as the cause.
    ///
    /// Validation failures already carry their message and are not wrapped.
    pub fn from_screen(message: Option<&str>, err: CoreError) -> Self {
        let cause = Self::from(err);
        match message {
            Some(m) if m != cause.to_string() => Self::Screen {
                message: m.to_owned(),
                cause: Box::new(cause),
            },
            _ => cause,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::UnknownProfile { name } => Self::ProfileNotFound {
                name,
                available: "run `custbook config profiles`".into(),
            },
            other => Self::Config(Box::new(other)),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => Self::InvalidInput {
                message: e.to_string(),
            },

            CoreError::AddressIndex(e) => Self::Validation {
                field: "address".into(),
                reason: e.to_string(),
            },

            CoreError::MissingId => Self::InvalidInput {
                message: CoreError::MissingId.to_string(),
            },

            CoreError::NotFound { identifier } => Self::NotFound {
                resource_type: "customer".into(),
                identifier,
                list_command: "customers list".into(),
            },

            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Timeout => Self::Timeout,

            CoreError::Transport { message, status } => Self::ApiError { status, message },

            CoreError::NotLoaded => Self::State {
                message: CoreError::NotLoaded.to_string(),
            },

            CoreError::SubmitInFlight => Self::State {
                message: CoreError::SubmitInFlight.to_string(),
            },

            CoreError::Cancelled => Self::Interrupted,

            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
