use clap::Args;

use rsv_core::Resource;

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Resource collection (usuarios, experiencias, hoteles, ...).
    pub resource: Resource,

    /// Substring filter applied client-side over the fetched rows.
    #[arg(long)]
    pub search: Option<String>,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Page size (defaults to general.per_page from config).
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    /// Resource collection.
    pub resource: Resource,

    /// Record id.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Resource collection.
    pub resource: Resource,

    /// Record payload as a JSON object.
    #[arg(long)]
    pub data: String,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    /// Resource collection.
    pub resource: Resource,

    /// Record id.
    pub id: String,

    /// Record payload as a JSON object.
    #[arg(long)]
    pub data: String,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Resource collection.
    pub resource: Resource,

    /// Record id.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Resource collection.
    pub resource: Resource,

    /// Field to group by (e.g. `ciudad`, `tipo`, `activo`).
    #[arg(long)]
    pub by: String,
}
