use std::path::Path;

use anyhow::Context;
use haven_audit::ChangeAuditor;
use haven_config::HavenConfig;
use haven_db::service::AuditLog;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub log: AuditLog,
    pub config: HavenConfig,
}

impl AppContext {
    /// Open the audit log named by `config.database.path`, creating its
    /// parent directory when the path is file-backed.
    pub async fn init(config: HavenConfig) -> anyhow::Result<Self> {
        let path = config.database.path.as_str();
        if !config.database.is_in_memory() {
            if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database directory {}", parent.display())
                })?;
            }
        }

        let log = AuditLog::open_local(path)
            .await
            .with_context(|| format!("failed to open audit log at {path}"))?;

        Ok(Self { log, config })
    }

    /// Auditor writing into this context's log, honoring `audit.enabled`.
    pub fn auditor(&self) -> ChangeAuditor<&AuditLog> {
        ChangeAuditor::new(&self.log).with_enabled(self.config.audit.enabled)
    }
}
