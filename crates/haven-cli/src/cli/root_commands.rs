use clap::Subcommand;

use crate::cli::subcommands::AuditCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Audit log inspection and recording.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
}
