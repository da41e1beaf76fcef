use serde::Serialize;

use rsv_core::Resource;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::resource::DeleteArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse {
    deleted: bool,
    resource: Resource,
    id: String,
}

pub async fn handle(
    args: &DeleteArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.client.remove(args.resource, &args.id).await?;
    output(
        &DeleteResponse {
            deleted: true,
            resource: args.resource,
            id: args.id.clone(),
        },
        flags.format,
    )
}
