//! Clap derive structures for the `custbook` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// custbook -- manage customer records from the command line
#[derive(Debug, Parser)]
#[command(
    name = "custbook",
    version,
    about = "Manage customer records and their addresses from the command line",
    long_about = "A command-line front end for a customer records REST service.\n\n\
        List, create, view, and edit customers, and maintain each customer's\n\
        ordered list of postal addresses.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "CUSTBOOK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Customer service API root (overrides profile)
    #[arg(long, short = 'u', env = "CUSTBOOK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "CUSTBOOK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "CUSTBOOK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (0 disables)
    #[arg(long, env = "CUSTBOOK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    pub fn format(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List, create, view, update, and delete customers
    #[command(alias = "cust", alias = "c")]
    Customers(CustomersArgs),

    /// Edit a customer's address list
    #[command(alias = "addr", alias = "a")]
    Addresses(AddressesArgs),

    /// Open a screen by route path ("/", "/create", "/profile/ID", "/update/ID")
    Open {
        /// Route path
        path: String,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CUSTOMERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers
    #[command(alias = "ls")]
    List {
        /// Case-insensitive match on first/last name, substring on phone
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show a customer profile with its addresses
    #[command(alias = "show")]
    Get {
        /// Customer ID
        id: String,
    },

    /// Create a customer
    Create {
        #[command(flatten)]
        contact: ContactArgs,

        /// Address as "STREET|CITY|STATE|PIN" (repeatable, in order)
        #[arg(long = "address", short = 'a', value_name = "ADDRESS")]
        addresses: Vec<String>,
    },

    /// Update a customer's contact fields
    Update {
        /// Customer ID
        id: String,

        #[command(flatten)]
        contact: ContactArgs,
    },

    /// Delete a customer
    #[command(alias = "rm")]
    Delete {
        /// Customer ID
        id: String,
    },
}

/// Contact fields. On update, omitted fields keep their current value.
#[derive(Debug, Args)]
pub struct ContactArgs {
    /// First name (letters only)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name (letters only)
    #[arg(long)]
    pub last_name: Option<String>,

    /// Phone number (exactly 10 digits)
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADDRESSES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AddressesArgs {
    #[command(subcommand)]
    pub command: AddressesCommand,
}

#[derive(Debug, Subcommand)]
pub enum AddressesCommand {
    /// List a customer's addresses
    #[command(alias = "ls")]
    List {
        /// Customer ID
        id: String,
    },

    /// Append an address
    Add {
        /// Customer ID
        id: String,

        #[command(flatten)]
        fields: AddressFieldArgs,

        /// Also make it the primary address
        #[arg(long)]
        primary: bool,
    },

    /// Replace fields of the address at a position
    Update {
        /// Customer ID
        id: String,

        /// Address number as shown in listings (1-based)
        #[arg(value_name = "N")]
        position: usize,

        #[command(flatten)]
        fields: AddressFieldArgs,
    },

    /// Remove the address at a position
    #[command(alias = "rm")]
    Remove {
        /// Customer ID
        id: String,

        /// Address number as shown in listings (1-based)
        #[arg(value_name = "N")]
        position: usize,
    },

    /// Make the address at a position the primary one
    Primary {
        /// Customer ID
        id: String,

        /// Address number as shown in listings (1-based)
        #[arg(value_name = "N")]
        position: usize,
    },
}

#[derive(Debug, Args)]
pub struct AddressFieldArgs {
    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// State name, e.g. "Tamil Nadu" (case-insensitive)
    #[arg(long)]
    pub state: Option<String>,

    /// PIN code
    #[arg(long)]
    pub pin: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a value on the active profile
    Set {
        /// Key: api_url, insecure, timeout, ca_cert
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
