// ── Field validation ──
//
// Pure, fail-fast checks run before any request leaves the process.
// Each rule reports one human-readable reason; the first failing rule
// wins, in this order: required fields, names, phone, email, addresses.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::{Address, ContactFields, Customer, Region};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("name pattern is valid"));

// ASCII digits only; `\d` would also accept other Unicode digit classes.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A rule violation detected before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all the details")]
    MissingField,

    #[error("Names should contain only alphabetical characters")]
    InvalidName,

    #[error("Phone number must contain exactly 10 digits")]
    InvalidPhone,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// `index` is the zero-based position of the first incomplete address.
    #[error("Please fill in all address details")]
    IncompleteAddress { index: usize },

    #[error("Please select a valid state")]
    InvalidRegion,
}

/// Which address fields count as required.
///
/// The creation form requires a street; the profile screen's add and
/// update forms do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressCheck {
    /// Street, city, state, and pin code.
    Creation,
    /// City, state, and pin code.
    ProfileEdit,
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check the four contact fields.
pub fn validate_contact(fields: ContactFields<'_>) -> Result<(), ValidationError> {
    let ContactFields {
        first_name,
        last_name,
        phone_number,
        email_address,
    } = fields;

    if [first_name, last_name, phone_number, email_address]
        .iter()
        .any(|v| v.is_empty())
    {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_name(first_name) || !is_valid_name(last_name) {
        return Err(ValidationError::InvalidName);
    }
    if !is_valid_phone(phone_number) {
        return Err(ValidationError::InvalidPhone);
    }
    if !is_valid_email(email_address) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Check a single address. `index` is only used to label the error.
pub fn validate_address(
    address: &Address,
    index: usize,
    check: AddressCheck,
) -> Result<(), ValidationError> {
    let base_complete =
        !address.city.is_empty() && !address.state.is_empty() && !address.pin_code.is_empty();
    let street_ok = match check {
        AddressCheck::Creation => !address.street.is_empty(),
        AddressCheck::ProfileEdit => true,
    };

    if base_complete && street_ok {
        Ok(())
    } else {
        Err(ValidationError::IncompleteAddress { index })
    }
}

/// Contact fields first, then every address in order.
pub fn validate_customer(customer: &Customer, check: AddressCheck) -> Result<(), ValidationError> {
    validate_contact(customer.contact())?;
    customer
        .addresses
        .iter()
        .enumerate()
        .try_for_each(|(index, address)| validate_address(address, index, check))
}

/// Map free text to a canonical region name.
pub fn parse_region(value: &str) -> Result<Region, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidRegion)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::AddressBook;

    fn fields<'a>(first: &'a str, last: &'a str, phone: &'a str, email: &'a str) -> ContactFields<'a> {
        ContactFields {
            first_name: first,
            last_name: last,
            phone_number: phone,
            email_address: email,
        }
    }

    fn complete_address() -> Address {
        Address::new("12 MG Road", "Warangal", "Telangana", "506002")
    }

    #[test]
    fn valid_contact_passes() {
        let ok = fields("Asha", "Rao", "9876543210", "asha.rao@example.com");
        assert_eq!(validate_contact(ok), Ok(()));
    }

    #[test]
    fn missing_field_is_reported_first() {
        // Also has a bad phone and email, but required-fields wins.
        let result = validate_contact(fields("", "R4o", "12", "nope"));
        assert_eq!(result, Err(ValidationError::MissingField));
    }

    #[test]
    fn name_rule_precedes_phone_rule() {
        let result = validate_contact(fields("Asha", "Rao-Iyer", "12345", "x"));
        assert_eq!(result, Err(ValidationError::InvalidName));
    }

    #[test]
    fn names_reject_spaces_and_digits() {
        assert!(!is_valid_name("Mary Ann"));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("Zoë"));
        assert!(is_valid_name("Pranay"));
    }

    #[test]
    fn short_phone_is_rejected_with_message() {
        let err = validate_contact(fields("Asha", "Rao", "12345", "asha.rao@example.com"))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone);
        assert_eq!(err.to_string(), "Phone number must contain exactly 10 digits");
    }

    #[test]
    fn phone_requires_exactly_ten_ascii_digits() {
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("01234567890"));
        assert!(!is_valid_phone("012345678a"));
        assert!(!is_valid_phone("٠١٢٣٤٥٦٧٨٩"));
        assert!(!is_valid_phone("98765 43210"));
    }

    #[test]
    fn email_rule_is_last_contact_check() {
        let result = validate_contact(fields("Asha", "Rao", "9876543210", "asha.rao@example"));
        assert_eq!(result, Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.in"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email("a@c"));
    }

    #[test]
    fn creation_check_requires_street() {
        let mut address = complete_address();
        address.street.clear();
        assert_eq!(
            validate_address(&address, 0, AddressCheck::Creation),
            Err(ValidationError::IncompleteAddress { index: 0 })
        );
    }

    #[test]
    fn profile_check_does_not_require_street() {
        let mut address = complete_address();
        address.street.clear();
        assert_eq!(validate_address(&address, 0, AddressCheck::ProfileEdit), Ok(()));
    }

    #[test]
    fn both_checks_require_city_state_and_pin() {
        for check in [AddressCheck::Creation, AddressCheck::ProfileEdit] {
            let mut no_pin = complete_address();
            no_pin.pin_code.clear();
            assert!(validate_address(&no_pin, 2, check).is_err());

            let mut no_state = complete_address();
            no_state.state.clear();
            assert!(validate_address(&no_state, 2, check).is_err());
        }
    }

    #[test]
    fn customer_validation_reports_first_incomplete_address() {
        let customer = Customer {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            phone_number: "9876543210".into(),
            email_address: "asha.rao@example.com".into(),
            addresses: AddressBook::from(vec![complete_address(), Address::default()]),
            ..Customer::default()
        };
        assert_eq!(
            validate_customer(&customer, AddressCheck::Creation),
            Err(ValidationError::IncompleteAddress { index: 1 })
        );
    }

    #[test]
    fn blank_draft_fails_on_required_fields() {
        assert_eq!(
            validate_customer(&Customer::draft(), AddressCheck::Creation),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn region_parsing() {
        assert_eq!(parse_region(" kerala ").unwrap(), Region::Kerala);
        assert_eq!(parse_region("Gondor"), Err(ValidationError::InvalidRegion));
    }
}
