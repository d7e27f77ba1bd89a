use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `haven` binary.
#[derive(Debug, Parser)]
#[command(name = "haven", version, about = "Haven - sanctuary audit log tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Audit database path (overrides `database.path` from config)
    #[arg(short, long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::AuditCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "haven",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "audit",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Audit {
                action: AuditCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["haven", "audit", "get", "3", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Audit {
                action: AuditCommands::Get { id: 3 }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["haven", "--format", "xml", "audit", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn get_requires_numeric_id() {
        let parsed = Cli::try_parse_from(["haven", "audit", "get", "abc"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn diff_parses_paths_and_dry_run() {
        let cli = Cli::try_parse_from([
            "haven",
            "audit",
            "diff",
            "--entity-kind",
            "horses",
            "--actor",
            "12",
            "--before",
            "old.json",
            "--after",
            "new.json",
            "--primary-key",
            "horse_id",
            "--dry-run",
        ])
        .expect("cli should parse");

        let Commands::Audit {
            action:
                AuditCommands::Diff {
                    entity_kind,
                    actor,
                    before,
                    after,
                    primary_key,
                    dry_run,
                },
        } = cli.command
        else {
            panic!("expected audit diff");
        };
        assert_eq!(entity_kind, "horses");
        assert_eq!(actor.as_deref(), Some("12"));
        assert_eq!(before, PathBuf::from("old.json"));
        assert_eq!(after, PathBuf::from("new.json"));
        assert_eq!(primary_key.as_deref(), Some("horse_id"));
        assert!(dry_run);
    }

    #[test]
    fn created_requires_snapshot() {
        let parsed = Cli::try_parse_from(["haven", "audit", "created", "--entity-kind", "tasks"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["haven", "--database", "/tmp/audit.db", "audit", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.database.as_deref(), Some("/tmp/audit.db"));
    }
}
