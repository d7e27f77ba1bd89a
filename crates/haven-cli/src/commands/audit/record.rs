use std::path::Path;

use haven_audit::diff::{creation_changes, deletion_changes};
use haven_core::ActorId;

use super::RecordSummary;
use crate::cli::GlobalFlags;
use crate::commands::shared::snapshot::load_snapshot;
use crate::context::AppContext;

#[derive(Clone, Copy, Debug)]
pub enum Lifecycle {
    Created,
    Deleted,
}

pub async fn run(
    lifecycle: Lifecycle,
    entity_kind: &str,
    actor: Option<&ActorId>,
    snapshot: &Path,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = load_snapshot(snapshot)?;
    let auditor = ctx.auditor();

    let (changes, outcome) = match lifecycle {
        Lifecycle::Created => (
            creation_changes(&snapshot),
            auditor.record_creation(actor, entity_kind, &snapshot).await,
        ),
        Lifecycle::Deleted => (
            deletion_changes(&snapshot),
            auditor.record_deletion(actor, entity_kind, &snapshot).await,
        ),
    };

    RecordSummary {
        entity_kind,
        recorded: auditor.is_enabled(),
        changes,
        outcome,
    }
    .finish(flags)
}
