// ── Wire ↔ domain conversion ──
//
// Translates `custbook-api` records into canonical domain types and back.
// The server's `id` / `_id` split is resolved here and nowhere else.

use custbook_api::{AddressRecord, CustomerRecord};

use crate::model::{Address, AddressBook, Customer, CustomerId};

impl From<AddressRecord> for Address {
    fn from(r: AddressRecord) -> Self {
        Self {
            street: r.street,
            city: r.city,
            state: r.state,
            pin_code: r.pin_code,
            is_primary: r.is_primary,
        }
    }
}

impl From<&Address> for AddressRecord {
    fn from(a: &Address) -> Self {
        Self {
            street: a.street.clone(),
            city: a.city.clone(),
            state: a.state.clone(),
            pin_code: a.pin_code.clone(),
            is_primary: a.is_primary,
        }
    }
}

impl From<CustomerRecord> for Customer {
    fn from(r: CustomerRecord) -> Self {
        let id = r.record_id().and_then(CustomerId::new);
        Self {
            id,
            first_name: r.first_name,
            last_name: r.last_name,
            phone_number: r.phone_number,
            email_address: r.email_address,
            addresses: r.addresses.into_iter().map(Address::from).collect::<AddressBook>(),
        }
    }
}

impl From<&Customer> for CustomerRecord {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.as_ref().map(|id| id.as_str().to_owned()),
            legacy_id: None,
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone_number: c.phone_number.clone(),
            email_address: c.email_address.clone(),
            addresses: c.addresses.iter().map(AddressRecord::from).collect(),
        }
    }
}
