//! Shared helpers for command handlers.

use std::future::Future;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use custbook_core::validation::parse_region;
use custbook_core::{Address, CoreError, CustomerId};

use crate::cli::{AddressFieldArgs, GlobalOpts};
use crate::error::CliError;

/// Parse a customer identifier argument.
pub fn customer_id(raw: &str) -> Result<CustomerId, CliError> {
    CustomerId::new(raw).ok_or_else(|| CoreError::MissingId.into())
}

/// Convert a 1-based address number from the command line to an index.
pub fn address_index(position: usize) -> Result<usize, CliError> {
    position.checked_sub(1).ok_or_else(|| CliError::Validation {
        field: "position".into(),
        reason: "address numbers start at 1".into(),
    })
}

/// Parse `STREET|CITY|STATE|PIN`. Empty parts are kept for validation to
/// report; a non-empty state must name a known region.
pub fn parse_address(raw: &str) -> Result<Address, CliError> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
    let [street, city, state, pin] = parts.as_slice() else {
        return Err(CliError::Validation {
            field: "address".into(),
            reason: format!("expected \"STREET|CITY|STATE|PIN\", got \"{raw}\""),
        });
    };
    Ok(Address::new(*street, *city, canonical_state(state)?, *pin))
}

/// Apply the given address flags on top of `base`.
pub fn merge_address(base: Address, fields: AddressFieldArgs) -> Result<Address, CliError> {
    let state = match fields.state {
        Some(state) => canonical_state(&state)?,
        None => base.state,
    };
    Ok(Address {
        street: fields.street.unwrap_or(base.street),
        city: fields.city.unwrap_or(base.city),
        state,
        pin_code: fields.pin.unwrap_or(base.pin_code),
        is_primary: base.is_primary,
    })
}

fn canonical_state(raw: &str) -> Result<String, CliError> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }
    let region = parse_region(raw).map_err(CoreError::from)?;
    Ok(region.to_string())
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Await `fut` behind a stderr spinner. Nothing is drawn when stderr is
/// not a terminal or `--quiet` is set.
pub async fn with_spinner<F, T>(message: &str, global: &GlobalOpts, fut: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = (!global.quiet && std::io::stderr().is_terminal()).then(|| spinner(message));
    let out = fut.await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    out
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_owned());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn address_parts_in_order() {
        let address = parse_address("12 MG Road | Chennai | tamil nadu | 600001").unwrap();
        assert_eq!(
            address,
            Address::new("12 MG Road", "Chennai", "Tamil Nadu", "600001")
        );
    }

    #[test]
    fn blank_parts_survive_parsing() {
        let address = parse_address("|Kochi||682001").unwrap();
        assert_eq!(address.street, "");
        assert_eq!(address.state, "");
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(matches!(
            parse_address("12 MG Road|Chennai"),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn unknown_state_uses_form_message() {
        let err = parse_address("1 Road|Town|Atlantis|000000").unwrap_err();
        assert_eq!(err.to_string(), "Please select a valid state");
        assert_eq!(err.exit_code(), crate::error::exit_code::USAGE);
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(address_index(1).unwrap(), 0);
        assert_eq!(address_index(3).unwrap(), 2);
        assert!(address_index(0).is_err());
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let base = Address {
            is_primary: true,
            ..Address::new("A Street", "Warangal", "Telangana", "506002")
        };
        let merged = merge_address(
            base,
            AddressFieldArgs {
                street: None,
                city: Some("Hyderabad".into()),
                state: None,
                pin: Some("500001".into()),
            },
        )
        .unwrap();
        assert_eq!(merged.street, "A Street");
        assert_eq!(merged.city, "Hyderabad");
        assert_eq!(merged.pin_code, "500001");
        assert!(merged.is_primary);
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(customer_id("  ").is_err());
        assert_eq!(customer_id("c-1").unwrap().as_str(), "c-1");
    }
}
