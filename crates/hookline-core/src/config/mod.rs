//! Configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from an optional
//! TOML file overlaid with `HOOKLINE__*` environment variables. Every field
//! carries a serde default, so an empty source yields a usable config.

pub mod logging;
pub mod registry;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::registry::RegistryConfig;

use crate::error::HookError;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HooklineConfig {
    /// Registration defaults.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HooklineConfig {
    /// Load configuration from an optional TOML file and the environment.
    ///
    /// Environment variables use the `HOOKLINE` prefix and `__` as the
    /// section separator, e.g. `HOOKLINE__REGISTRY__DEFAULT_PRIORITY=20`.
    pub fn load(path: Option<&Path>) -> Result<Self, HookError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("HOOKLINE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};

    use super::*;
    use crate::error::ErrorKind;

    /// Serializes tests that read or write `HOOKLINE__*` variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("hookline.toml");
        std::fs::write(&path, contents).expect("write");
        path
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let _guard = env_guard();
        let config = HooklineConfig::load(None).expect("load");
        assert_eq!(config.registry.default_priority, 10);
        assert_eq!(config.registry.filter_accepted_args, 1);
        assert_eq!(config.registry.action_accepted_args, 0);
        assert_eq!(config.registry.invalid_accepted_args, 1);
    }

    #[test]
    fn test_load_missing_file_is_not_an_error() {
        let _guard = env_guard();
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("absent.toml");
        let config = HooklineConfig::load(Some(path.as_path())).expect("load");
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_load_from_toml_overrides_fields() {
        let _guard = env_guard();
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_config(
            &temp,
            "[registry]\ndefault_priority = 50\n\n[logging]\nformat = \"json\"\n",
        );

        let config = HooklineConfig::load(Some(path.as_path())).expect("load");
        assert_eq!(config.registry.default_priority, 50);
        assert_eq!(config.registry.filter_accepted_args, 1);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = env_guard();
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_config(&temp, "[registry]\ndefault_priority = 50\n");

        // SAFETY: every test touching HOOKLINE__* holds ENV_LOCK.
        unsafe { std::env::set_var("HOOKLINE__REGISTRY__DEFAULT_PRIORITY", "77") };
        let loaded = HooklineConfig::load(Some(path.as_path()));
        unsafe { std::env::remove_var("HOOKLINE__REGISTRY__DEFAULT_PRIORITY") };

        let config = loaded.expect("load");
        assert_eq!(config.registry.default_priority, 77);
        assert_eq!(config.registry.filter_accepted_args, 1);
    }

    #[test]
    fn test_load_rejects_malformed_values() {
        let _guard = env_guard();
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_config(&temp, "[registry]\ndefault_priority = \"soon\"\n");

        let err = HooklineConfig::load(Some(path.as_path())).expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.source.is_some());
    }
}
