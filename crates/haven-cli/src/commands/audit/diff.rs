use std::path::Path;

use haven_core::ActorId;

use super::RecordSummary;
use crate::cli::GlobalFlags;
use crate::commands::shared::snapshot::load_snapshot;
use crate::context::AppContext;
use crate::output::output;

pub struct DiffParams<'a> {
    pub entity_kind: &'a str,
    pub actor: Option<ActorId>,
    pub before: &'a Path,
    pub after: &'a Path,
    pub primary_key: Option<&'a str>,
    pub dry_run: bool,
}

pub async fn run(params: &DiffParams<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let before = load_snapshot(params.before)?;
    let after = load_snapshot(params.after)?;
    let primary_key = params
        .primary_key
        .unwrap_or(&ctx.config.audit.primary_key_field);

    let changes = haven_audit::diff(&before, &after, primary_key);
    if params.dry_run {
        return output(&changes, flags.format);
    }

    let auditor = ctx.auditor();
    let outcome = auditor
        .record_changes(
            params.actor.as_ref(),
            params.entity_kind,
            &before,
            &after,
            primary_key,
        )
        .await;

    RecordSummary {
        entity_kind: params.entity_kind,
        recorded: auditor.is_enabled(),
        changes,
        outcome,
    }
    .finish(flags)
}
