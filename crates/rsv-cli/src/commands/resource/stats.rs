use serde::Serialize;

use rsv_api::listing;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::resource::StatsArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StatsRow {
    value: String,
    count: usize,
}

pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx.client.list(args.resource).await?;
    let counts = listing::count_by(&rows, &args.by);

    let response: Vec<StatsRow> = counts
        .into_iter()
        .map(|(value, count)| StatsRow { value, count })
        .collect();
    output(&response, flags.format)
}
