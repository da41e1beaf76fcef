use clap::Subcommand;

use super::subcommands::auth::AuthCommands;
use super::subcommands::resource::{
    CreateArgs, DeleteArgs, GetArgs, ListArgs, StatsArgs, UpdateArgs,
};

/// Root command tree for `rsv`.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Session management (login, logout, status).
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// List records of a resource, with client-side search and paging.
    List(ListArgs),
    /// Show one record by id.
    Get(GetArgs),
    /// Create a record from a JSON payload.
    Create(CreateArgs),
    /// Update a record from a JSON payload.
    Update(UpdateArgs),
    /// Delete a record by id.
    Delete(DeleteArgs),
    /// Count records grouped by a field.
    Stats(StatsArgs),
}
