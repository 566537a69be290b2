//! # Configuration Loader / 配置加载器
//!
//! Reads `config.toml` into [`Settings`]. Sections and keys missing from the
//! file keep their defaults; unknown keys are ignored.
//!
//! ## Lookup / 查找顺序
//!
//! 1. An explicit `--config <path>` must exist.
//! 2. Otherwise `<config dir>/clipkeep/config.toml` is used when present.
//! 3. Otherwise the built-in defaults apply.

use anyhow::Context;
use ck_core::Settings;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const APP_DIR_NAME: &str = "clipkeep";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`Settings`].
pub fn load_config(config_path: PathBuf) -> anyhow::Result<Settings> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

/// `<config dir>/clipkeep/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve settings following the lookup order above.
pub fn resolve_settings(explicit: Option<PathBuf>) -> anyhow::Result<Settings> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading config");
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            info!(path = %path.display(), "Loading config");
            load_config(path)
        }
        other => {
            debug!(
                path = ?other.as_deref().map(Path::display).map(|p| p.to_string()),
                "No config file, using defaults"
            );
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_core::PasteBehavior;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [history]
            capacity = 20
            poll_interval_ms = 250

            [privacy]
            mask_passwords = false
            excluded_apps = ["Vault"]

            [[paste.behaviors]]
            app_identifier = "com.apple.Safari"
            app_name = "Safari"
            url_pattern = "notion.so"
            behavior = "link_conversion"
        "#,
        );

        let settings = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(settings.history.capacity, 20);
        assert_eq!(settings.history.poll_interval_ms, 250);
        assert!(!settings.privacy.mask_passwords);
        assert!(settings.privacy.is_excluded(Some("Vault")));
        assert!(!settings.privacy.is_excluded(Some("1Password")));

        let rule = settings.paste.behaviors.find("com.apple.Safari").unwrap();
        assert_eq!(rule.url_pattern.as_deref(), Some("notion.so"));
        assert_eq!(rule.behavior, PasteBehavior::LinkConversion);
    }

    #[test]
    fn test_load_config_fills_missing_sections_with_defaults() {
        let temp_file = write_config("[history]\ncapacity = 5\n");

        let settings = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(settings.history.capacity, 5);
        assert_eq!(settings.history.poll_interval_ms, 500);
        assert!(settings.privacy.mask_passwords);
        assert_eq!(settings.paste.timings, Default::default());
        assert!(settings.paste.behaviors.find("com.google.Chrome").is_some());
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let non_existent_path = PathBuf::from("/this/path/does/not/exist/config.toml");

        let err = load_config(non_existent_path).unwrap_err();

        assert!(
            err.to_string().contains("Failed to read config file"),
            "Expected IO error message, got: {}",
            err
        );
    }

    #[test]
    fn test_load_config_rejects_malformed_toml() {
        let temp_file = write_config("[history\ncapacity = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let result = resolve_settings(Some(PathBuf::from("/nope/clipkeep.toml")));
        assert!(result.is_err());
    }
}
