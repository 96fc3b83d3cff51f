//! Configuration loader for the Ogun Startup Advisor.
//!
//! Reads `config.toml` (explicit path, `OGUN_ADVISOR_CONFIG`, or
//! `{config_dir}/ogun-advisor/config.toml`) into [`AdvisorConfig`], and
//! loads a `.env` file so the API key can live next to the binary.

use std::path::{Path, PathBuf};

use advisor_types::config::AdvisorConfig;
use advisor_types::error::ConfigError;

/// Resolve the default config file location.
///
/// Priority: `OGUN_ADVISOR_CONFIG`, then the platform config directory,
/// then `./config.toml`.
pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("OGUN_ADVISOR_CONFIG") {
        return PathBuf::from(path);
    }

    if let Some(dir) = dirs::config_dir() {
        return dir.join("ogun-advisor").join("config.toml");
    }

    PathBuf::from("config.toml")
}

/// Load configuration.
///
/// - `explicit` set: the file must exist and parse, otherwise an error is
///   returned (the user asked for that file).
/// - Default location missing: [`AdvisorConfig::default()`].
/// - Default location present but unparsable: logs a warning and returns
///   the default.
pub async fn load_config(explicit: Option<&Path>) -> Result<AdvisorConfig, ConfigError> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => resolve_config_path(),
    };

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return Ok(AdvisorConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: config_path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    parse_config(&content, &config_path, explicit.is_some())
}

/// Parse TOML config text. A parse failure is an error when `strict`,
/// otherwise it is logged and the defaults are used.
fn parse_config(content: &str, path: &Path, strict: bool) -> Result<AdvisorConfig, ConfigError> {
    match toml::from_str::<AdvisorConfig>(content) {
        Ok(config) => Ok(config),
        Err(err) if strict => Err(ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        }),
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            Ok(AdvisorConfig::default())
        }
    }
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Returns the file that was loaded, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(err) if err.not_found() => None,
        Err(err) => {
            tracing::warn!("Failed to load .env: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
port = 4000
model = "gemini-2.5-pro"
max_output_tokens = 512
"#,
        )
        .await
        .unwrap();

        let config = load_config(Some(&config_path)).await.unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.max_output_tokens, 512);
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
    }

    #[tokio::test]
    async fn load_config_invalid_explicit_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "port = \"not a number")
            .await
            .unwrap();

        let err = load_config(Some(&config_path)).await.unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert!(path.ends_with("config.toml")),
            other => panic!("expected Parse, got {other}"),
        }
    }

    #[test]
    fn parse_config_lenient_falls_back_to_default() {
        let config = parse_config("port = [", Path::new("config.toml"), false).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn load_config_missing_explicit_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");

        let err = load_config(Some(&missing)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
