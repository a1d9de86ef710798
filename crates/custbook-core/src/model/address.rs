// ── Postal addresses ──
//
// An address has no identifier of its own. It is addressed by its index
// in the owning customer's `AddressBook`, so removing an entry renumbers
// every entry after it.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

// ── Address ─────────────────────────────────────────────────────────

/// A postal address owned by a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Region name. Input surfaces restrict this to [`Region`]; records
    /// fetched from the server are kept verbatim.
    pub state: String,
    pub pin_code: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pin_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            pin_code: pin_code.into(),
            is_primary: false,
        }
    }

    /// The state parsed as a known [`Region`], if it is one.
    pub fn region(&self) -> Option<Region> {
        self.state.parse().ok()
    }

    /// Single-line rendering for tables.
    pub fn one_line(&self) -> String {
        [
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.pin_code.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}

// ── Region ──────────────────────────────────────────────────────────

/// The fixed list of states offered by the address forms.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[strum(serialize = "Andhra Pradesh")]
    AndhraPradesh,
    #[strum(serialize = "Arunachal Pradesh")]
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    #[strum(serialize = "Himachal Pradesh")]
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    #[strum(serialize = "Madhya Pradesh")]
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    #[strum(serialize = "Tamil Nadu")]
    TamilNadu,
    Telangana,
    Tripura,
    #[strum(serialize = "Uttar Pradesh")]
    UttarPradesh,
    Uttarakhand,
    #[strum(serialize = "West Bengal")]
    WestBengal,
}

// ── AddressBook ─────────────────────────────────────────────────────

/// Positional index outside the current address list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Address {} does not exist (customer has {len} addresses)", .index + 1)]
pub struct AddressIndexError {
    pub index: usize,
    pub len: usize,
}

/// Ordered list of a customer's addresses.
///
/// Insertion order is significant: it drives the "Address N" label and
/// the index used by [`replace_at`](Self::replace_at) and
/// [`remove_at`](Self::remove_at). Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    entries: Vec<Address>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to the end of the list. Always succeeds.
    pub fn append(&mut self, address: Address) {
        self.entries.push(address);
    }

    /// Overwrite the entry at `index`, returning the previous value.
    pub fn replace_at(&mut self, index: usize, address: Address) -> Result<Address, AddressIndexError> {
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(AddressIndexError { index, len })?;
        Ok(std::mem::replace(slot, address))
    }

    /// Delete the entry at `index`, shifting later entries left.
    ///
    /// Out-of-range indices leave the list untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Address, AddressIndexError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Flag the entry at `index` as primary and clear the flag everywhere else.
    pub fn mark_primary(&mut self, index: usize) -> Result<(), AddressIndexError> {
        self.check_index(index)?;
        for (i, address) in self.entries.iter_mut().enumerate() {
            address.is_primary = i == index;
        }
        Ok(())
    }

    /// First address flagged as primary.
    pub fn primary(&self) -> Option<&Address> {
        self.entries.iter().find(|a| a.is_primary)
    }

    pub fn get(&self, index: usize) -> Option<&Address> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Address> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.entries
    }

    /// Display label for the entry at `index` ("Address 1" for index 0).
    pub fn label(index: usize) -> String {
        format!("Address {}", index + 1)
    }

    fn check_index(&self, index: usize) -> Result<(), AddressIndexError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(AddressIndexError {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl From<Vec<Address>> for AddressBook {
    fn from(entries: Vec<Address>) -> Self {
        Self { entries }
    }
}

impl From<AddressBook> for Vec<Address> {
    fn from(book: AddressBook) -> Self {
        book.entries
    }
}

impl FromIterator<Address> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
