use std::io::Write as _;

use anyhow::Context as _;
use serde::Serialize;

use rsv_auth::SessionState;
use rsv_core::AdminIdentity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    #[serde(flatten)]
    identity: AdminIdentity,
    expires_at: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_password()?,
    };

    let identity = ctx.client.login(&args.email, &password).await?;
    let admin = identity.to_identity();
    let expires_at = identity.expires_at().map(|at| at.to_rfc3339());
    ctx.session = SessionState::login_succeeded(identity);

    if !flags.quiet {
        if let Some(name) = admin.display_name() {
            eprintln!("Sesión iniciada como {name}");
        }
    }

    output(
        &AuthLoginResponse {
            authenticated: true,
            identity: admin,
            expires_at,
        },
        flags.format,
    )
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Contraseña: ");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
