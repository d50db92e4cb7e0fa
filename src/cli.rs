use std::convert::Infallible;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::types::UserId;

#[derive(Parser)]
#[command(name = "users")]
#[command(about = "A CLI for managing user records over the users API", version)]
#[command(after_help = "EXAMPLES:
    users status 1                                  Show whether user 1 is active
    users show 1                                    Show user 1
    users save 1 --name \"John\" --email john@x.io   Replace user 1
    users delete 1                                  Delete user 1")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// API base URL (overrides USERS_API_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether a user is active
    #[command(after_help = "EXAMPLES:
    users status 1
    users status 1 --json")]
    Status {
        /// User identifier
        #[arg(value_parser = parse_user_id)]
        id: UserId,
    },
    /// Show a user record
    #[command(after_help = "EXAMPLES:
    users show 1
    users show 3f2a-uuid-here")]
    Show {
        /// User identifier
        #[arg(value_parser = parse_user_id)]
        id: UserId,
    },
    /// Replace a user record
    #[command(after_help = "EXAMPLES:
    users save 1 --name \"John Doe\" --email john@example.com
    users save 2 --name Jane --email jane@example.com --inactive")]
    Save(SaveArgs),
    /// Delete a user record
    #[command(after_help = "EXAMPLES:
    users delete 1")]
    Delete {
        /// User identifier
        #[arg(value_parser = parse_user_id)]
        id: UserId,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    users completions bash > ~/.bash_completion.d/users
    users completions zsh > ~/.zfunc/_users")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args)]
pub struct SaveArgs {
    /// User identifier
    #[arg(value_parser = parse_user_id)]
    pub id: UserId,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (must contain '@')
    #[arg(long)]
    pub email: String,

    /// Mark the user inactive
    #[arg(long)]
    pub inactive: bool,
}

/// Route ids through `FromStr` so numeric ids stay numbers on the wire.
fn parse_user_id(s: &str) -> Result<UserId, Infallible> {
    s.parse()
}
