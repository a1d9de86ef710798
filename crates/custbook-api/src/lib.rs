// custbook-api: Async Rust client for the customer records REST API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::CustomerClient;
pub use error::Error;
pub use models::{AddressRecord, CustomerRecord};
pub use transport::{TlsMode, TransportConfig};
