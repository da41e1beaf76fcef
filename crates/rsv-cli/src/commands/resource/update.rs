use crate::cli::GlobalFlags;
use crate::cli::subcommands::resource::UpdateArgs;
use crate::commands::resource::parse_record;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &UpdateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let record = parse_record(&args.data)?;
    let updated = ctx.client.update(args.resource, &args.id, &record).await?;
    output(&updated, flags.format)
}
