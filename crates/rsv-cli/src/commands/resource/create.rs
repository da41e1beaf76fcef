use crate::cli::GlobalFlags;
use crate::cli::subcommands::resource::CreateArgs;
use crate::commands::resource::parse_record;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &CreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let record = parse_record(&args.data)?;
    let created = ctx.client.create(args.resource, &record).await?;
    output(&created, flags.format)
}
