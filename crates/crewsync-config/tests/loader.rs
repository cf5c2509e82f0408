//! Integration tests for layered configuration loading.

use std::io::Write;
use std::path::Path;

use figment::Jail;
use tempfile::NamedTempFile;

use crewsync_config::{extract, file_layers, load_config, ConfigError, CrewSyncConfig};

#[test]
fn file_overrides_defaults() {
    let mut file = NamedTempFile::new().expect("tmp");
    writeln!(file, "[registry]\nmax_crew_size = 12\n\n[server]\nname = \"crew-test\"").expect("write");

    let config = extract(file_layers(Some(file.path())).expect("layers")).expect("extract");
    assert_eq!(config.registry.max_crew_size, 12);
    assert_eq!(config.server.name, "crew-test");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_file_is_an_error() {
    let err = file_layers(Some(Path::new("/definitely/not/here.toml"))).expect_err("missing");
    assert!(matches!(err, ConfigError::Missing(_)));
}

#[test]
fn unknown_key_in_file_is_rejected() {
    let mut file = NamedTempFile::new().expect("tmp");
    writeln!(file, "[registry]\nmax_crew = 3").expect("write");

    let err = extract(file_layers(Some(file.path())).expect("layers")).expect_err("unknown");
    assert!(matches!(err, ConfigError::Load(_)));
}

#[test]
fn zero_capacity_is_invalid() {
    let mut file = NamedTempFile::new().expect("tmp");
    writeln!(file, "[registry]\nmax_crew_size = 0").expect("write");

    let err = extract(file_layers(Some(file.path())).expect("layers")).expect_err("zero");
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn env_layers_override_file() {
    Jail::expect_with(|jail| {
        jail.create_file("crew.toml", "[registry]\nmax_crew_size = 12")?;
        jail.set_env("CREWSYNC_REGISTRY__MAX_CREW_SIZE", "15");
        jail.set_env("CREWSYNC_LOGGING__LEVEL", "debug");

        let config = load_config(Some(Path::new("crew.toml"))).expect("load");
        assert_eq!(config.registry.max_crew_size, 15);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn legacy_max_crew_size_wins() {
    Jail::expect_with(|jail| {
        jail.set_env("CREWSYNC_REGISTRY__MAX_CREW_SIZE", "15");
        jail.set_env("MAX_CREW_SIZE", "8");

        let config = load_config(None).expect("load");
        assert_eq!(config.registry.max_crew_size, 8);
        Ok(())
    });
}

#[test]
fn no_sources_gives_defaults() {
    Jail::expect_with(|_jail| {
        let config = load_config(None).expect("load");
        assert_eq!(config, CrewSyncConfig::default());
        Ok(())
    });
}

#[test]
fn non_numeric_capacity_is_load_error() {
    Jail::expect_with(|jail| {
        jail.set_env("MAX_CREW_SIZE", "lots");

        let err = load_config(None).expect_err("bad value");
        assert!(matches!(err, ConfigError::Load(_)));
        Ok(())
    });
}
