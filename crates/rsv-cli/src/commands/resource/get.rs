use crate::cli::GlobalFlags;
use crate::cli::subcommands::resource::GetArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(args: &GetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx.client.fetch(args.resource, &args.id).await?;
    output(&record, flags.format)
}
