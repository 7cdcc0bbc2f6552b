//! Configuration management for the Lacework CLI
//!
//! Credentials are stored per profile in `~/.lacework/config.yaml`:
//!
//! ```yaml
//! profiles:
//!   default:
//!     account: acme
//!     api_key: ACME_1234
//!     api_secret: _abc123
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::ClientBuilder;
use crate::error::{ConfigError, Result};

/// Profile used when none is named
pub const DEFAULT_PROFILE: &str = "default";

pub const ENV_ACCOUNT: &str = "LW_ACCOUNT";
pub const ENV_SUBACCOUNT: &str = "LW_SUBACCOUNT";
pub const ENV_API_KEY: &str = "LW_API_KEY";
pub const ENV_API_SECRET: &str = "LW_API_SECRET";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// Credentials of one Lacework account
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub account: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaccount: Option<String>,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub api_secret: String,
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("account", &self.account)
            .field("subaccount", &self.subaccount)
            .field("api_key", &self.api_key)
            .field("api_secret", &"********")
            .finish()
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".lacework").join("config.yaml"))
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load from `path`, or from the default location when `None`
    pub fn load_at(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path.to_path_buf()),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::default_path()?)
    }

    /// Save to `path`, or to the default location when `None`
    pub fn save_at(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => self.save_to(path.to_path_buf()),
            None => self.save(),
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Credentials are readable by the owner only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Look up a profile by name
    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()).into())
    }

    /// Insert or replace a profile
    pub fn set_profile(&mut self, name: impl Into<String>, profile: Profile) {
        self.profiles.insert(name.into(), profile);
    }
}

impl Profile {
    /// Override fields from the `LW_*` environment variables
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Override fields from any variable source; empty values are ignored
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(account) = var(ENV_ACCOUNT) {
            self.account = account;
        }
        if let Some(subaccount) = var(ENV_SUBACCOUNT) {
            self.subaccount = Some(subaccount);
        }
        if let Some(key) = var(ENV_API_KEY) {
            self.api_key = key;
        }
        if let Some(secret) = var(ENV_API_SECRET) {
            self.api_secret = secret;
        }
    }

    /// Check every field needed to authenticate is present
    pub fn verify(&self) -> Result<()> {
        if self.account.is_empty() {
            return Err(ConfigError::MissingAccount.into());
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }
        if self.api_secret.is_empty() {
            return Err(ConfigError::MissingApiSecret.into());
        }
        Ok(())
    }

    /// Builder preloaded with this profile's credentials
    pub fn client_builder(&self) -> ClientBuilder {
        let mut builder = ClientBuilder::new(&self.account).api_keys(&self.api_key, &self.api_secret);
        if let Some(subaccount) = self.subaccount.as_deref().filter(|s| !s.is_empty()) {
            builder = builder.subaccount(subaccount);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn profile() -> Profile {
        Profile {
            account: "acme".into(),
            subaccount: None,
            api_key: "ACME_KEY".into(),
            api_secret: "_secret".into(),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.set_profile(DEFAULT_PROFILE, profile());
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path.clone()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.profile("default").unwrap().account, "acme");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_missing_file_and_profile() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from(dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));

        let err = Config::default().profile("prod").unwrap_err();
        assert_eq!(err.to_string(), "Profile 'prod' not found in configuration");
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut p = profile();
        p.apply_env_from(|key| match key {
            ENV_ACCOUNT => Some("other".into()),
            ENV_SUBACCOUNT => Some("sub".into()),
            ENV_API_KEY => Some(String::new()),
            _ => None,
        });
        assert_eq!(p.account, "other");
        assert_eq!(p.subaccount.as_deref(), Some("sub"));
        assert_eq!(p.api_key, "ACME_KEY");
        assert_eq!(p.api_secret, "_secret");
    }

    #[test]
    fn test_verify() {
        assert!(profile().verify().is_ok());

        let mut p = profile();
        p.api_secret.clear();
        assert!(p.verify().unwrap_err().to_string().contains("api_secret missing"));

        let p = Profile::default();
        assert!(p.verify().unwrap_err().to_string().contains("account missing"));
    }

    #[test]
    fn test_client_builder() {
        let mut p = profile();
        p.subaccount = Some("dev".into());
        let client = p.client_builder().build().unwrap();
        assert_eq!(client.account(), "acme");
        assert_eq!(client.subaccount(), Some("dev"));
        assert_eq!(client.url().as_str(), "https://acme.lacework.net/");
    }

    #[test]
    fn test_debug_masks_secret() {
        let out = format!("{:?}", profile());
        assert!(!out.contains("_secret"));
    }
}
