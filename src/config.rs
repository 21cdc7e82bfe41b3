// Configuration management

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::AppConfig;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "sonbarsa.log";

pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("sonbarsa");

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    Ok(config_dir)
}

pub fn get_log_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(LOG_FILE))
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_dir()?)
}

/// Read `config.toml` from `dir`, writing the defaults there first if it is missing.
pub fn load_config_from(dir: &Path) -> Result<AppConfig> {
    let config_path = dir.join(CONFIG_FILE);

    if !config_path.exists() {
        let default_config = AppConfig::default();
        save_config_to(dir, &default_config)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(&config_path).context("Failed to read config file")?;

    let config: AppConfig = toml::from_str(&contents).context("Failed to parse config file")?;

    Ok(config)
}

pub fn save_config_to(dir: &Path, config: &AppConfig) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(dir.join(CONFIG_FILE), contents).context("Failed to write config file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_creates_default() {
        let temp_dir = TempDir::new().unwrap();

        let config = load_config_from(temp_dir.path());

        assert!(
            config.is_ok(),
            "Config loading failed: {:?}",
            config.as_ref().err()
        );
        assert_eq!(config.unwrap(), AppConfig::default());
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();

        let config = AppConfig {
            functions_url: "https://project.supabase.co".to_string(),
            api_key: "anon-key".to_string(),
            ..Default::default()
        };
        save_config_to(temp_dir.path(), &config).unwrap();

        let loaded = load_config_from(temp_dir.path()).unwrap();
        assert_eq!(loaded.functions_url, "https://project.supabase.co");
        assert_eq!(loaded.api_key, "anon-key");
        assert_eq!(loaded.function_name, "rephrase-title");
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE), "functions_url = [").unwrap();

        let err = load_config_from(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config);
        assert!(serialized.is_ok());

        let deserialized: Result<AppConfig, _> = toml::from_str(&serialized.unwrap());
        assert!(deserialized.is_ok());
    }
}
