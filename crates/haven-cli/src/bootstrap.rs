use anyhow::Context;
use haven_config::HavenConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, apply CLI overrides, and validate the result.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HavenConfig> {
    let mut config = HavenConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut HavenConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.database {
        tracing::debug!(path, "database path overridden on the command line");
        config.database.path.clone_from(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(database: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            database: database.map(String::from),
        }
    }

    #[test]
    fn database_flag_overrides_config() {
        let mut config = HavenConfig::default();
        apply_overrides(&mut config, &flags(Some(":memory:")));
        assert!(config.database.is_in_memory());
    }

    #[test]
    fn no_flag_keeps_config_path() {
        let mut config = HavenConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, ".haven/haven.db");
    }
}
