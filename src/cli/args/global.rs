//! Options every subcommand sees

use std::path::PathBuf;

use lacework_sdk::config::{Config, DEFAULT_PROFILE};
use lacework_sdk::error::ConfigError;
use lacework_sdk::{Error, Result};

use crate::cli::{Cli, OutputFormat};

/// Global flags lifted out of [`Cli`] so handlers don't depend on clap types.
///
/// Each flag also reads an `LW_*` variable; credentials in the environment
/// are layered over the profile later by the command context.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Profile named with `--profile`, if any
    pub profile: Option<String>,

    /// Config file override (defaults to ~/.lacework/config.yaml)
    pub config: Option<PathBuf>,

    pub debug: bool,

    /// API base URL override
    pub api_url: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            profile: cli.profile.clone(),
            config: cli.config.clone(),
            debug: cli.debug,
            api_url: cli.api_url.clone(),
        }
    }

    /// Profile to read or write
    pub fn profile_name(&self) -> &str {
        self.profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    /// Load the config file; an absent file reads as an empty config
    pub fn load_config(&self) -> Result<Config> {
        match Config::load_at(self.config.as_deref()) {
            Err(Error::Config(ConfigError::NotFound)) => Ok(Config::default()),
            other => other,
        }
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_at(self.config.as_deref())
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lacework_sdk::config::Profile;
    use tempfile::tempdir;

    fn opts(profile: Option<&str>, config: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Table,
            profile: profile.map(str::to_string),
            config,
            debug: false,
            api_url: None,
        }
    }

    #[test]
    fn test_profile_name_defaults() {
        assert_eq!(opts(None, None).profile_name(), "default");
        assert_eq!(opts(Some("prod"), None).profile_name(), "prod");
    }

    #[test]
    fn test_missing_config_is_empty() {
        let dir = tempdir().unwrap();
        let opts = opts(None, Some(dir.path().join("missing.yaml")));
        assert!(opts.load_config().unwrap().profiles.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let opts = opts(Some("prod"), Some(dir.path().join("config.yaml")));

        let mut config = opts.load_config().unwrap();
        config.set_profile(
            opts.profile_name(),
            Profile {
                account: "acme".into(),
                api_key: "KEY".into(),
                api_secret: "_secret".into(),
                ..Default::default()
            },
        );
        opts.save_config(&config).unwrap();

        let loaded = opts.load_config().unwrap();
        assert_eq!(loaded.profile("prod").unwrap().account, "acme");
    }
}
