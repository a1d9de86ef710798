// ── Customer records ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::address::{Address, AddressBook};
use crate::error::CoreError;

// ── CustomerId ──────────────────────────────────────────────────────

/// Server-assigned customer identifier.
///
/// Opaque and never empty. Stable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wrap a raw identifier. Empty or whitespace-only strings are rejected.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CustomerId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(CoreError::MissingId)
    }
}

// ── Customer ────────────────────────────────────────────────────────

/// A customer: scalar contact fields plus an ordered address list.
///
/// `id` is `None` while the record is a draft and set once the remote
/// store has created it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    #[serde(default)]
    pub addresses: AddressBook,
}

/// Borrowed view of the four contact fields checked by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone_number: &'a str,
    pub email_address: &'a str,
}

impl Customer {
    /// A fresh draft: blank contact fields and one empty address slot.
    pub fn draft() -> Self {
        Self {
            addresses: AddressBook::from(vec![Address::default()]),
            ..Self::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// The identifier, or [`CoreError::MissingId`] for drafts.
    pub fn require_id(&self) -> Result<&CustomerId, CoreError> {
        self.id.as_ref().ok_or(CoreError::MissingId)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    pub fn contact(&self) -> ContactFields<'_> {
        ContactFields {
            first_name: &self.first_name,
            last_name: &self.last_name,
            phone_number: &self.phone_number,
            email_address: &self.email_address,
        }
    }

    /// Same record with its address list swapped out.
    pub fn with_addresses(&self, addresses: AddressBook) -> Self {
        Self {
            addresses,
            ..self.clone()
        }
    }

    /// List-screen search: case-insensitive on names, substring on phone.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
            || self.phone_number.contains(query)
    }
}
