//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::MintConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<MintConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MintConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration, falling back to defaults when the file is absent.
///
/// A missing file is not an error: the built-in defaults carry the same
/// placeholder addresses a fresh config file would, and fail the same way
/// downstream.
pub fn load_or_default(path: &Path) -> Result<MintConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        Ok(MintConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = load_or_default(Path::new("/nonexistent/mint.toml")).unwrap();
        assert!(config.mint.contract_address.starts_with('<'));
    }

    #[test]
    fn test_load_malformed_addresses_unchanged() {
        let mut file = tempfile_in_target();
        writeln!(
            file.1,
            r#"
            [mint]
            contract_address = "  <Replace with Contract Address>  "
            recipient = "zz-not-an-address"
            "#
        )
        .unwrap();

        let config = load_config(&file.0).unwrap();
        // Whitespace and garbage alike pass through uncorrected
        assert_eq!(config.mint.contract_address, "  <Replace with Contract Address>  ");
        assert_eq!(config.mint.recipient, "zz-not-an-address");
        let _ = fs::remove_file(&file.0);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile_in_target();
        writeln!(file.1, "network = not valid toml").unwrap();

        let err = load_config(&file.0).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let _ = fs::remove_file(&file.0);
    }

    fn tempfile_in_target() -> (std::path::PathBuf, fs::File) {
        let path = std::env::temp_dir().join(format!(
            "shielded-mint-test-{}-{:?}.toml",
            std::process::id(),
            std::thread::current().id()
        ));
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
