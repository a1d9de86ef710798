// Wire types for the customer REST API.
//
// Field names follow the server's camelCase JSON. The record identifier is
// `id` on some deployments and Mongo's `_id` on others; both are accepted
// on input, only `id` is ever written.

use serde::{Deserialize, Serialize};

/// A postal address as it travels over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pin_code: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// A customer as it travels over the wire.
///
/// Used both for request bodies (drafts carry no id) and for responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Legacy alias for `id`. Read-only.
    #[serde(rename = "_id", default, skip_serializing)]
    pub legacy_id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub addresses: Vec<AddressRecord>,
}

impl CustomerRecord {
    /// The record identifier, whichever field the server used.
    ///
    /// Empty strings are treated as absent.
    pub fn record_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.legacy_id.as_deref().filter(|id| !id.is_empty()))
    }
}
