// ── Domain model ──
//
// Canonical customer types shared by every screen. Wire formats live in
// `custbook-api`; `convert` translates between the two.

pub mod address;
pub mod customer;

pub use address::{Address, AddressBook, AddressIndexError, Region};
pub use customer::{ContactFields, Customer, CustomerId};
