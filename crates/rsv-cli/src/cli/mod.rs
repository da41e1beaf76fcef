use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rsv` binary.
#[derive(Debug, Parser)]
#[command(name = "rsv", version, about = "ReservaT - consola de administración")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use rsv_core::Resource;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["rsv", "--format", "table", "--verbose", "list", "usuarios"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["rsv", "auth", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Auth { .. }));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["rsv", "--format", "xml", "auth", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_parses_resource_and_paging() {
        let cli = Cli::try_parse_from([
            "rsv", "list", "hoteles", "--search", "playa", "--page", "2", "--per-page", "5",
        ])
        .expect("cli should parse");

        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.resource, Resource::Hoteles);
        assert_eq!(args.search.as_deref(), Some("playa"));
        assert_eq!(args.page, 2);
        assert_eq!(args.per_page, Some(5));
    }

    #[test]
    fn unknown_resource_is_rejected_with_candidates() {
        let parsed = Cli::try_parse_from(["rsv", "list", "vuelos"]);
        let error = parsed.expect_err("should reject unknown resource");
        assert!(error.to_string().contains("recurso desconocido"));
    }

    #[test]
    fn update_requires_data() {
        let parsed = Cli::try_parse_from(["rsv", "update", "usuarios", "42"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn login_password_is_optional() {
        let cli = Cli::try_parse_from(["rsv", "auth", "login", "--email", "a@example.com"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Auth { .. }));
    }
}
