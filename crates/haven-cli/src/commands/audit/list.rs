use haven_core::ActorId;
use haven_core::entities::AuditEntry;
use haven_db::repos::audit::AuditFilter;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct ListParams {
    pub entity_kind: Option<String>,
    pub actor: Option<ActorId>,
    pub field: Option<String>,
}

pub async fn run(params: ListParams, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = fetch(params, ctx, flags).await?;
    output(&entries, flags.format)
}

/// `--limit` wins; otherwise `general.default_limit` from config.
async fn fetch(
    params: ListParams,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<AuditEntry>> {
    let limit = flags.limit.unwrap_or(ctx.config.general.default_limit);
    let filter = AuditFilter {
        entity_kind: params.entity_kind,
        actor_id: params.actor,
        field_name: params.field,
        limit: Some(limit),
    };

    ctx.log.query(&filter).await.map_err(Into::into)
}
