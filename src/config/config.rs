use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scraper: ScraperConfig,
}

// Unset values keep the reqwest defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScraperConfig {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(SETTINGS_FILE)
}

// APP_SCRAPER__TIMEOUT_SECS=10
pub fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    load_config_with(path, app_environment())
}

fn app_environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

fn load_config_with(path: impl AsRef<Path>, environment: Environment) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref().to_string_lossy().into_owned();

    let settings = Config::builder()
        .add_source(File::new(&path, FileFormat::Toml).required(false))
        .add_source(environment)
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn environment_from(vars: &[(&str, &str)]) -> Environment {
        app_environment().source(Some(
            vars.iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_with(dir.path().join("Settings.toml"), environment_from(&[])).unwrap();

        assert_eq!(config.scraper.user_agent, None);
        assert_eq!(config.scraper.timeout_secs, None);
    }

    #[test]
    fn reads_scraper_table_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[scraper]\nuser_agent = \"title-bot/1.0\"\ntimeout_secs = 10").unwrap();

        let config = load_config_with(file.path(), environment_from(&[])).unwrap();

        assert_eq!(config.scraper.user_agent.as_deref(), Some("title-bot/1.0"));
        assert_eq!(config.scraper.timeout_secs, Some(10));
    }

    #[test]
    fn partial_file_leaves_other_keys_unset() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[scraper]\ntimeout_secs = 3").unwrap();

        let config = load_config_with(file.path(), environment_from(&[])).unwrap();

        assert_eq!(config.scraper.user_agent, None);
        assert_eq!(config.scraper.timeout_secs, Some(3));
    }

    #[test]
    fn single_underscore_prefix_sets_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let environment = environment_from(&[("APP_SCRAPER__TIMEOUT_SECS", "7")]);

        let config = load_config_with(dir.path().join("Settings.toml"), environment).unwrap();

        assert_eq!(config.scraper.timeout_secs, Some(7));
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[scraper]\nuser_agent = \"from-file\"").unwrap();
        let environment = environment_from(&[("APP_SCRAPER__USER_AGENT", "from-env")]);

        let config = load_config_with(file.path(), environment).unwrap();

        assert_eq!(config.scraper.user_agent.as_deref(), Some("from-env"));
    }

    #[test]
    fn target_url_is_not_configurable() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[scraper]\ntarget_url = \"http://elsewhere.invalid\"").unwrap();
        let environment = environment_from(&[("APP_SCRAPER__TARGET_URL", "http://elsewhere.invalid")]);

        let config = load_config_with(file.path(), environment).unwrap();

        assert!(!format!("{:?}", config.scraper).contains("elsewhere"));
    }

    #[test]
    fn malformed_value_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[scraper]\ntimeout_secs = \"soon\"").unwrap();

        assert!(load_config_with(file.path(), environment_from(&[])).is_err());
    }
}
