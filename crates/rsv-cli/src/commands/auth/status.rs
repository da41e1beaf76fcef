use serde::Serialize;

use rsv_auth::AUTH_TOKEN_KEY;
use rsv_core::AdminIdentity;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    #[serde(flatten)]
    identity: Option<AdminIdentity>,
    expires_at: Option<String>,
    token_source: Option<&'static str>,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match ctx.session.identity() {
        Some(identity) => AuthStatusResponse {
            authenticated: true,
            identity: Some(identity.to_identity()),
            expires_at: identity.expires_at().map(|at| at.to_rfc3339()),
            token_source: ctx.store.source_of(AUTH_TOKEN_KEY),
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            identity: None,
            expires_at: None,
            token_source: None,
            note: Some("sin sesión activa — ejecuta `rsv auth login`".into()),
        },
    };

    output(&status, flags.format)
}
