//! Customer command handlers: the list, create, profile, and update screens.

use std::fmt::Write as _;

use tabled::Tabled;

use custbook_core::{AddressBook, Controller, Customer, ListView, ProfileView, RemoteStore};

use crate::cli::{ColorMode, ContactArgs, CustomersArgs, CustomersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::{addresses, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Addresses")]
    addresses: usize,
    #[tabled(rename = "Primary")]
    primary: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: id_of(c),
            name: c.full_name(),
            phone: c.phone_number.clone(),
            email: c.email_address.clone(),
            addresses: c.addresses.len(),
            primary: c
                .addresses
                .primary()
                .map_or_else(|| "-".into(), custbook_core::Address::one_line),
        }
    }
}

fn id_of(c: &Customer) -> String {
    c.id.as_ref().map(ToString::to_string).unwrap_or_default()
}

/// Profile detail: contact block followed by the numbered address table.
fn detail(c: &Customer, color: &ColorMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", output::heading(&c.full_name(), color));
    let _ = writeln!(out, "ID:      {}", id_of(c));
    let _ = writeln!(out, "Phone:   {}", c.phone_number);
    let _ = writeln!(out, "Email:   {}", c.email_address);
    let _ = writeln!(out);
    if c.addresses.is_empty() {
        out.push_str("No addresses");
    } else {
        out.push_str(&addresses::table(&c.addresses));
    }
    out
}

fn apply_contact(customer: &mut Customer, contact: ContactArgs) {
    if let Some(v) = contact.first_name {
        customer.first_name = v;
    }
    if let Some(v) = contact.last_name {
        customer.last_name = v;
    }
    if let Some(v) = contact.phone {
        customer.phone_number = v;
    }
    if let Some(v) = contact.email {
        customer.email_address = v;
    }
}

fn is_empty(contact: &ContactArgs) -> bool {
    contact.first_name.is_none()
        && contact.last_name.is_none()
        && contact.phone.is_none()
        && contact.email.is_none()
}

pub(super) fn print_customer(c: &Customer, global: &GlobalOpts) {
    let color = global.color_mode();
    let out = output::render_single(&global.format(), c, |c| detail(c, &color), id_of);
    output::print_output(&out, global.quiet);
}

// ── Screens ─────────────────────────────────────────────────────────

/// Load the list screen and print the customers matching `search`.
pub(super) async fn list_screen(
    mut view: ListView<RemoteStore>,
    search: Option<String>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if let Err(e) = util::with_spinner("Loading customers", global, view.load()).await {
        return Err(CliError::from_screen(view.error_message(), e));
    }
    if let Some(query) = search {
        view.set_query(query);
    }
    let visible = view.visible();
    let out = output::render_list(
        &global.format(),
        &visible,
        |c| CustomerRow::from(*c),
        |c| id_of(c),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

/// Load a profile screen and print the customer with its addresses.
pub(super) async fn profile_screen(
    mut view: ProfileView<RemoteStore>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if let Err(e) = util::with_spinner("Loading customer", global, view.load()).await {
        return Err(CliError::from_screen(view.error_message(), e));
    }
    if let Some(customer) = view.customer() {
        print_customer(customer, global);
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    controller: &Controller,
    args: CustomersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CustomersCommand::List { search } => {
            list_screen(controller.list_view(), search, global).await
        }

        CustomersCommand::Get { id } => {
            let view = controller.profile_view(Some(util::customer_id(&id)?));
            profile_screen(view, global).await
        }

        CustomersCommand::Create { contact, addresses } => {
            let mut view = controller.create_view();
            let draft = view.draft_mut();
            apply_contact(draft, contact);
            if !addresses.is_empty() {
                draft.addresses = addresses
                    .iter()
                    .map(|raw| util::parse_address(raw))
                    .collect::<Result<AddressBook, _>>()?;
            }

            let created = util::with_spinner("Creating customer", global, view.submit())
                .await
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;

            print_customer(&created, global);
            output::success(
                &format!("Customer {} created", created.full_name()),
                global,
            );
            Ok(())
        }

        CustomersCommand::Update { id, contact } => {
            if is_empty(&contact) {
                return Err(CliError::Validation {
                    field: "contact".into(),
                    reason: "pass at least one of --first-name, --last-name, --phone, --email"
                        .into(),
                });
            }

            let mut view = controller.update_view(util::customer_id(&id)?);
            if let Err(e) = util::with_spinner("Loading customer", global, view.load()).await {
                return Err(CliError::from_screen(view.error_message(), e));
            }
            if let Some(customer) = view.customer_mut() {
                apply_contact(customer, contact);
            }

            util::with_spinner("Saving customer", global, view.submit())
                .await
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;

            if let Some(customer) = view.customer() {
                print_customer(customer, global);
            }
            output::success("Customer updated", global);
            Ok(())
        }

        CustomersCommand::Delete { id } => {
            let id = util::customer_id(&id)?;
            if !util::confirm(
                &format!("Delete customer '{id}' and all of its addresses?"),
                global.yes,
            )? {
                return Ok(());
            }

            let mut view = controller.list_view();
            util::with_spinner("Deleting customer", global, view.delete(&id))
                .await
                .map_err(|e| CliError::from_screen(view.error_message(), e))?;
            output::success(&format!("Customer {id} deleted"), global);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use custbook_core::{Address, CustomerId};

    use super::*;

    fn priya() -> Customer {
        let mut primary = Address::new("B Street", "Kochi", "Kerala", "682001");
        primary.is_primary = true;
        Customer {
            id: CustomerId::new("c-7"),
            first_name: "Priya".into(),
            last_name: "Nair".into(),
            phone_number: "9123456780".into(),
            email_address: "priya@example.com".into(),
            addresses: AddressBook::from(vec![
                Address::new("A Street", "Kochi", "Kerala", "682001"),
                primary,
            ]),
        }
    }

    #[test]
    fn row_shows_primary_address() {
        let row = CustomerRow::from(&priya());
        assert_eq!(row.name, "Priya Nair");
        assert_eq!(row.addresses, 2);
        assert_eq!(row.primary, "B Street, Kochi, Kerala, 682001");
    }

    #[test]
    fn detail_numbers_addresses() {
        let out = detail(&priya(), &ColorMode::Never);
        assert!(out.starts_with("Priya Nair\n"));
        assert!(out.contains("Address 1"));
        assert!(out.contains("Address 2"));
    }

    #[test]
    fn omitted_contact_fields_are_kept() {
        let mut c = priya();
        apply_contact(
            &mut c,
            ContactArgs {
                first_name: None,
                last_name: None,
                phone: Some("9000000001".into()),
                email: None,
            },
        );
        assert_eq!(c.first_name, "Priya");
        assert_eq!(c.phone_number, "9000000001");
    }
}
