use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with admin credentials.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current session status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Admin account email.
    #[arg(long)]
    pub email: String,

    /// Password. Read from stdin when omitted.
    #[arg(long)]
    pub password: Option<String>,
}
