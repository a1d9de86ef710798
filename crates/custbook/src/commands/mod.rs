//! Command dispatch: bridges CLI args -> view models -> output formatting.

pub mod addresses;
pub mod config_cmd;
pub mod customers;
pub mod open;
pub mod util;

use custbook_core::Controller;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a store-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &Controller,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Customers(args) => customers::handle(controller, args, global).await,
        Command::Addresses(args) => addresses::handle(controller, args, global).await,
        Command::Open { path } => open::handle(controller, &path, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
