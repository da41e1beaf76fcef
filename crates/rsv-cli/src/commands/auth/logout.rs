use serde::Serialize;

use rsv_auth::SessionState;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.session = SessionState::logout(&ctx.store);
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
