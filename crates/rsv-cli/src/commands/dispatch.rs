use crate::cli::{Commands, GlobalFlags};
use crate::commands::{auth, resource};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Resource calls go out regardless; the service rejects them without a
    // valid credential.
    if !matches!(command, Commands::Auth { .. }) && !ctx.session.is_authenticated() {
        tracing::warn!("sin sesión activa; la petición irá sin credenciales");
    }

    match command {
        Commands::Auth { action } => auth::handle(&action, ctx, flags).await,
        Commands::List(args) => resource::list::handle(&args, ctx, flags).await,
        Commands::Get(args) => resource::get::handle(&args, ctx, flags).await,
        Commands::Create(args) => resource::create::handle(&args, ctx, flags).await,
        Commands::Update(args) => resource::update::handle(&args, ctx, flags).await,
        Commands::Delete(args) => resource::delete::handle(&args, ctx, flags).await,
        Commands::Stats(args) => resource::stats::handle(&args, ctx, flags).await,
    }
}
