// ── Runtime connection configuration ──
//
// These types describe *where* the customer service lives and how to talk
// to it. They never touch disk: the CLI builds a `StoreConfig` from its
// profile and hands it in once at startup.

use std::path::PathBuf;
use std::time::Duration;

use custbook_api::{TlsMode, TransportConfig};
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development servers).
    DangerAcceptInvalid,
}

/// Configuration for the remote customer store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// API root; collection paths are joined onto it (`{api_url}/customers`).
    pub api_url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl StoreConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            tls: TlsVerification::default(),
            timeout: Some(Duration::from_secs(30)),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Url::parse("http://localhost:5000").expect("default API URL is valid"))
    }
}
