//! `custbook open <PATH>`: show the screen a route path names.

use custbook_core::{Controller, Route, Screen};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::{customers, util};

pub async fn handle(
    controller: &Controller,
    path: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let route = Route::parse(path).ok_or_else(|| CliError::Validation {
        field: "path".into(),
        reason: format!("unknown route '{path}'. Expected /, /create, /profile/<ID>, or /update/<ID>"),
    })?;
    tracing::debug!(%route, "opening screen");

    match controller.open(&route) {
        Screen::List(view) => customers::list_screen(view, None, global).await,
        Screen::Profile(view) => customers::profile_screen(view, global).await,

        Screen::Update(mut view) => {
            if let Err(e) = util::with_spinner("Loading customer", global, view.load()).await {
                return Err(CliError::from_screen(view.error_message(), e));
            }
            if let Some(customer) = view.customer() {
                customers::print_customer(customer, global);
            }
            if !global.quiet {
                eprintln!("\nEdit with: custbook customers update {} [--first-name ..]", view.id());
            }
            Ok(())
        }

        Screen::Create(view) => {
            let out = output::render_single(
                &global.format(),
                view.draft(),
                |_| {
                    "custbook customers create --first-name NAME --last-name NAME \\\n    \
                     --phone DIGITS --email ADDRESS --address \"STREET|CITY|STATE|PIN\""
                        .to_owned()
                },
                |_| Route::Create.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
