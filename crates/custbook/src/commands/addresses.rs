//! Address command handlers: the profile screen's address editor.
//!
//! Addresses are identified by their 1-based number in the customer's
//! list. Removing one renumbers everything after it.

use serde::Serialize;
use tabled::Tabled;

use custbook_core::{Address, AddressBook, Controller, ProfileView, RemoteStore};

use crate::cli::{AddressesArgs, AddressesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

/// An address paired with its list number, for every output format.
#[derive(Serialize)]
struct Numbered<'a> {
    position: usize,
    #[serde(flatten)]
    address: &'a Address,
}

#[derive(Tabled)]
struct AddressRow {
    #[tabled(rename = "#")]
    label: String,
    #[tabled(rename = "Street")]
    street: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "PIN")]
    pin: String,
    #[tabled(rename = "Primary")]
    primary: String,
}

impl From<&Numbered<'_>> for AddressRow {
    fn from(n: &Numbered<'_>) -> Self {
        let a = n.address;
        Self {
            label: AddressBook::label(n.position - 1),
            street: a.street.clone(),
            city: a.city.clone(),
            state: a.state.clone(),
            pin: a.pin_code.clone(),
            primary: if a.is_primary { "★".into() } else { String::new() },
        }
    }
}

fn numbered(book: &AddressBook) -> Vec<Numbered<'_>> {
    book.iter()
        .enumerate()
        .map(|(i, address)| Numbered {
            position: i + 1,
            address,
        })
        .collect()
}

/// Numbered address table used by the profile detail view.
pub(super) fn table(book: &AddressBook) -> String {
    let rows: Vec<AddressRow> = numbered(book).iter().map(AddressRow::from).collect();
    output::render_table(&rows)
}

fn print_book(view: &ProfileView<RemoteStore>, global: &GlobalOpts) {
    let Some(customer) = view.customer() else {
        return;
    };
    let out = output::render_list(
        &global.format(),
        &numbered(&customer.addresses),
        |n: &Numbered<'_>| AddressRow::from(n),
        |n| n.address.one_line(),
    );
    output::print_output(&out, global.quiet);
}

async fn load_profile(
    controller: &Controller,
    id: &str,
    global: &GlobalOpts,
) -> Result<ProfileView<RemoteStore>, CliError> {
    let mut view = controller.profile_view(Some(util::customer_id(id)?));
    if let Err(e) = util::with_spinner("Loading customer", global, view.load()).await {
        return Err(CliError::from_screen(view.error_message(), e));
    }
    Ok(view)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: AddressesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AddressesCommand::List { id } => {
            let view = load_profile(controller, &id, global).await?;
            print_book(&view, global);
            Ok(())
        }

        AddressesCommand::Add {
            id,
            fields,
            primary,
        } => {
            let address = util::merge_address(Address::default(), fields)?;
            let mut view = load_profile(controller, &id, global).await?;

            util::with_spinner("Adding address", global, view.add_address(address))
                .await
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;

            let count = view.customer().map_or(0, |c| c.addresses.len());
            if primary && count > 0 {
                util::with_spinner("Marking primary", global, view.mark_primary(count - 1))
                    .await
                    .map_err(|e| CliError::from_screen(view.error_message(), e))?;
            }

            print_book(&view, global);
            output::success(
                &format!("{} added", AddressBook::label(count.saturating_sub(1))),
                global,
            );
            Ok(())
        }

        AddressesCommand::Update {
            id,
            position,
            fields,
        } => {
            let index = util::address_index(position)?;
            let mut view = load_profile(controller, &id, global).await?;

            view.open_update(index)
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;
            let base = view.editor().draft().cloned().unwrap_or_default();
            let merged = util::merge_address(base, fields)?;
            if let Some(draft) = view.editor_mut().draft_mut() {
                *draft = merged;
            }

            util::with_spinner("Saving address", global, view.save_editor())
                .await
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;

            print_book(&view, global);
            output::success(&format!("{} updated", AddressBook::label(index)), global);
            Ok(())
        }

        AddressesCommand::Remove { id, position } => {
            let index = util::address_index(position)?;
            let mut view = load_profile(controller, &id, global).await?;

            let shown = view
                .customer()
                .and_then(|c| c.addresses.get(index))
                .map(Address::one_line);
            if let Some(ref line) = shown {
                if !util::confirm(
                    &format!("Remove {} ({line})?", AddressBook::label(index)),
                    global.yes,
                )? {
                    return Ok(());
                }
            }

            util::with_spinner("Removing address", global, view.remove_address(index))
                .await
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;

            print_book(&view, global);
            output::success(&format!("{} removed", AddressBook::label(index)), global);
            Ok(())
        }

        AddressesCommand::Primary { id, position } => {
            let index = util::address_index(position)?;
            let mut view = load_profile(controller, &id, global).await?;

            util::with_spinner("Marking primary", global, view.mark_primary(index))
                .await
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;

            print_book(&view, global);
            output::success(
                &format!("{} is now the primary address", AddressBook::label(index)),
                global,
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> AddressBook {
        let mut second = Address::new("B Street", "Kochi", "Kerala", "682001");
        second.is_primary = true;
        AddressBook::from(vec![
            Address::new("A Street", "Kochi", "Kerala", "682001"),
            second,
        ])
    }

    #[test]
    fn rows_carry_labels_and_primary_marker() {
        let book = book();
        let rows: Vec<AddressRow> = numbered(&book).iter().map(AddressRow::from).collect();
        assert_eq!(rows[0].label, "Address 1");
        assert_eq!(rows[0].primary, "");
        assert_eq!(rows[1].label, "Address 2");
        assert_eq!(rows[1].primary, "★");
    }

    #[test]
    fn json_includes_position() {
        let book = book();
        let value = serde_json::to_value(numbered(&book)).unwrap_or_default();
        assert_eq!(value[1]["position"], 2);
        assert_eq!(value[1]["street"], "B Street");
        assert_eq!(value[1]["isPrimary"], true);
    }
}
