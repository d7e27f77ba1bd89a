use std::path::PathBuf;

use clap::Subcommand;

/// Audit log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// List audit entries, newest first.
    List {
        #[arg(long)]
        entity_kind: Option<String>,
        #[arg(long)]
        actor: Option<String>,
        #[arg(long)]
        field: Option<String>,
    },
    /// Get an audit entry by ID.
    Get { id: i64 },
    /// Append a single audit entry by hand.
    Append {
        #[arg(long)]
        entity_kind: String,
        #[arg(long)]
        actor: Option<String>,
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        before: Option<String>,
        #[arg(long)]
        after: Option<String>,
    },
    /// Diff two JSON snapshots of one record and record the changed fields.
    Diff {
        #[arg(long)]
        entity_kind: String,
        #[arg(long)]
        actor: Option<String>,
        /// JSON file holding the record before the update
        #[arg(long)]
        before: PathBuf,
        /// JSON file holding the record after the update
        #[arg(long)]
        after: PathBuf,
        /// Field treated as the primary key (defaults to `audit.primary_key_field`)
        #[arg(long)]
        primary_key: Option<String>,
        /// Print the computed changes without writing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Record every field of a newly created record.
    Created {
        #[arg(long)]
        entity_kind: String,
        #[arg(long)]
        actor: Option<String>,
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Record every field of a deleted record.
    Deleted {
        #[arg(long)]
        entity_kind: String,
        #[arg(long)]
        actor: Option<String>,
        #[arg(long)]
        snapshot: PathBuf,
    },
}
