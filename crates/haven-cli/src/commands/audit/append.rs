use haven_core::entities::NewAuditEntry;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(entry: &NewAuditEntry, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = ctx.log.append(entry).await?;
    output(&stored, flags.format)
}
