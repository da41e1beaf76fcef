use serde::Serialize;
use serde_json::Value;

use rsv_api::listing;
use rsv_core::Resource;

use crate::cli::subcommands::resource::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ListResponse {
    resource: Resource,
    total: usize,
    page: usize,
    per_page: usize,
    rows: Vec<Value>,
}

pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx.client.list(args.resource).await?;

    let filtered = match args.search.as_deref() {
        Some(query) => listing::search(&rows, query),
        None => rows,
    };
    let per_page = args.per_page.unwrap_or(ctx.config.general.per_page);
    let total = filtered.len();
    let page = args.page.max(1);
    let page_rows = listing::paginate(&filtered, page, per_page);

    // Table mode renders the rows themselves; the envelope only reads well
    // as JSON.
    if flags.format == OutputFormat::Table {
        output(&page_rows, flags.format)?;
        if !flags.quiet {
            eprintln!("{} de {total} registros (página {page})", page_rows.len());
        }
        return Ok(());
    }

    output(
        &ListResponse {
            resource: args.resource,
            total,
            page,
            per_page,
            rows: page_rows,
        },
        flags.format,
    )
}
