//! Domain layer between `custbook-api` and UI consumers (the CLI).
//!
//! This crate owns the business logic and screen state for managing
//! customer records:
//!
//! - **Domain model** ([`model`]): [`Customer`] with scalar contact fields
//!   and an ordered [`AddressBook`]. Addresses have no identity of their
//!   own; they are addressed by position ("Address 1", "Address 2", ...).
//!
//! - **[`validation`]**: Fail-fast field rules (names, phone, email,
//!   address completeness) run before any request is issued.
//!
//! - **[`CustomerStore`]**: The remote store contract (list/get/create/
//!   update/delete). [`RemoteStore`] implements it over the HTTP client.
//!
//! - **View models** ([`view`]): One owned object per screen (list,
//!   create, profile, update). Each carries a [`ViewScope`] whose
//!   cancellation token bounds every request to the screen's lifetime.
//!
//! - **[`Controller`]**: Facade built from a [`StoreConfig`] that opens
//!   screens by [`Route`].

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod route;
pub mod store;
pub mod validation;
pub mod view;
pub mod workflow;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{StoreConfig, TlsVerification};
pub use controller::{Controller, Screen};
pub use error::CoreError;
pub use route::Route;
pub use store::{CustomerStore, RemoteStore};
pub use validation::{AddressCheck, ValidationError};
pub use view::{
    AddressEditor, CreateView, ListView, ProfileView, UnmountHandle, UpdateView, ViewScope,
};
pub use workflow::{SubmitForm, SubmitPhase};

pub use model::{
    Address, AddressBook, AddressIndexError, ContactFields, Customer, CustomerId, Region,
};
