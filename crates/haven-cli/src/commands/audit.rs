#[path = "audit/append.rs"]
mod append;
#[path = "audit/diff.rs"]
mod diff;
#[path = "audit/get.rs"]
mod get;
#[path = "audit/list.rs"]
mod list;
#[path = "audit/record.rs"]
mod record;

use haven_audit::{AuditOutcome, FieldChange};
use haven_core::{ActorId, entity_kinds};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::context::AppContext;

/// Handle `haven audit`.
pub async fn handle(
    action: &AuditCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuditCommands::List {
            entity_kind,
            actor,
            field,
        } => {
            let params = list::ListParams {
                entity_kind: entity_kind.clone(),
                actor: parse_actor(actor.as_deref()),
                field: field.clone(),
            };
            list::run(params, ctx, flags).await
        }
        AuditCommands::Get { id } => get::run(*id, ctx, flags).await,
        AuditCommands::Append {
            entity_kind,
            actor,
            field,
            before,
            after,
        } => {
            check_entity_kind(entity_kind);
            let entry = haven_core::entities::NewAuditEntry {
                actor_id: parse_actor(actor.as_deref()),
                entity_kind: entity_kind.clone(),
                field_name: field.clone(),
                before_value: before.clone(),
                after_value: after.clone(),
            };
            append::run(&entry, ctx, flags).await
        }
        AuditCommands::Diff {
            entity_kind,
            actor,
            before,
            after,
            primary_key,
            dry_run,
        } => {
            check_entity_kind(entity_kind);
            let params = diff::DiffParams {
                entity_kind,
                actor: parse_actor(actor.as_deref()),
                before,
                after,
                primary_key: primary_key.as_deref(),
                dry_run: *dry_run,
            };
            diff::run(&params, ctx, flags).await
        }
        AuditCommands::Created {
            entity_kind,
            actor,
            snapshot,
        } => {
            check_entity_kind(entity_kind);
            let actor = parse_actor(actor.as_deref());
            record::run(record::Lifecycle::Created, entity_kind, actor.as_ref(), snapshot, ctx, flags)
                .await
        }
        AuditCommands::Deleted {
            entity_kind,
            actor,
            snapshot,
        } => {
            check_entity_kind(entity_kind);
            let actor = parse_actor(actor.as_deref());
            record::run(record::Lifecycle::Deleted, entity_kind, actor.as_ref(), snapshot, ctx, flags)
                .await
        }
    }
}

/// What a recording command computed and how many rows landed.
#[derive(Debug, Serialize)]
struct RecordSummary<'a> {
    entity_kind: &'a str,
    recorded: bool,
    changes: Vec<FieldChange>,
    outcome: AuditOutcome,
}

impl RecordSummary<'_> {
    /// Print the summary, then fail if any write was lost.
    fn finish(&self, flags: &GlobalFlags) -> anyhow::Result<()> {
        crate::output::output(self, flags.format)?;
        if !self.outcome.is_complete() {
            anyhow::bail!(
                "{} of {} audit writes failed for '{}'",
                self.outcome.failed,
                self.outcome.attempted,
                self.entity_kind
            );
        }
        Ok(())
    }
}

/// Warn about kinds no sanctuary handler writes. Unknown kinds are still
/// recorded; this only catches typos such as `horse` for `horses`.
fn check_entity_kind(kind: &str) -> bool {
    let known = entity_kinds::is_known(kind);
    if !known {
        tracing::warn!(
            entity_kind = kind,
            known = ?entity_kinds::ALL_KINDS,
            "entity kind is not one the sanctuary backend writes"
        );
    }
    known
}

/// Blank `--actor` values mean "no actor".
fn parse_actor(raw: Option<&str>) -> Option<ActorId> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ActorId::new)
}

#[cfg(test)]
mod tests {
    use haven_core::entity_kinds;

    use super::{check_entity_kind, parse_actor};

    #[test]
    fn actor_parsing() {
        assert_eq!(parse_actor(Some("42")).as_ref().map(|a| a.as_str()), Some("42"));
        assert!(parse_actor(Some("  ")).is_none());
        assert!(parse_actor(None).is_none());
    }

    #[test]
    fn entity_kind_check() {
        assert!(check_entity_kind(entity_kinds::HORSES));
        assert!(check_entity_kind(entity_kinds::PUSH_TOKENS));
        assert!(!check_entity_kind("horse"));
    }
}
