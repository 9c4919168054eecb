//! # Configuration Loader / 配置加载器
//!
//! Reads the console TOML file and maps it to [`ConsoleConfig`].
//! Pure data loading only: accept whatever is in the file.

use std::path::Path;

use anyhow::Context;
use idm_core::ConsoleConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<ConsoleConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ConsoleConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [backend]
            base_url = "http://idm.local:8080/openidm"
            admin_username = "openidm-admin"
            admin_password = "openidm-admin"

            [validation]
            password_min_length = 10
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.base_url, "http://idm.local:8080/openidm");
        assert_eq!(config.admin_username.as_deref(), Some("openidm-admin"));
        assert_eq!(config.password_min_length, 10);
        assert_eq!(config.form_id, "registration");
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let err = load_config("/definitely/not/here/console.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[backend\nbase_url = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
