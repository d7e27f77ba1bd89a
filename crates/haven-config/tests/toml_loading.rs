//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use haven_config::HavenConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/haven/audit.db"

[audit]
enabled = false
primary_key_field = "horse_id"

[general]
default_limit = 10
"#,
        )?;

        let config: HavenConfig = Figment::from(Serialized::defaults(HavenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/haven/audit.db");
        assert!(!config.audit.enabled);
        assert_eq!(config.audit.primary_key_field, "horse_id");
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[audit]
primary_key_field = "record_id"
"#,
        )?;

        let config: HavenConfig = Figment::from(Serialized::defaults(HavenConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.audit.enabled);
        assert_eq!(config.audit.primary_key_field, "record_id");
        assert_eq!(config.database.path, ".haven/haven.db");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".haven").map_err(|e| e.to_string())?;
        jail.create_file(
            ".haven/config.toml",
            r#"
[database]
path = "sanctuary.db"
"#,
        )?;

        let config = HavenConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.database.path, "sanctuary.db");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = "lots"
"#,
        )?;

        let result: Result<HavenConfig, _> =
            Figment::from(Serialized::defaults(HavenConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn extra_provider_from_outside_the_project() {
    let shared = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    std::fs::write(
        shared.path(),
        "[general]\ndefault_limit = 7\n\n[database]\npath = \":memory:\"\n",
    )
    .expect("write temp config");

    Jail::expect_with(|_jail| {
        let config: HavenConfig = HavenConfig::figment()
            .merge(Toml::file(shared.path()))
            .extract()?;

        assert_eq!(config.general.default_limit, 7);
        assert!(config.database.is_in_memory());
        Ok(())
    });
}
