//! Command execution context
//!
//! Loads the selected profile, applies environment overrides and builds the
//! API client every remote command needs.

use std::sync::Arc;

use lacework_sdk::config::Profile;
use lacework_sdk::{Client, Result};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Context for command execution containing the client and runtime options
pub struct CommandContext {
    /// Authenticated API client (Arc-wrapped so handlers can move it into futures)
    pub client: Arc<Client>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the profile cannot be resolved or lacks credentials.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let profile = resolve_profile(opts)?;
        profile.verify()?;

        let mut builder = profile.client_builder().debug(opts.debug);
        if let Some(url) = opts.api_url_ref() {
            builder = builder.url(url);
        }
        let client = builder.build()?;

        Ok(Self {
            client: Arc::new(client),
            format: opts.format,
        })
    }
}

/// Pick the profile named on the command line (or `default`) and layer the
/// `LW_*` environment variables over it.
///
/// A missing config file is fine when the environment provides everything.
pub fn resolve_profile(opts: &GlobalOptions) -> Result<Profile> {
    let config = opts.load_config()?;

    let mut profile = match config.profile(opts.profile_name()) {
        Ok(profile) => profile.clone(),
        Err(_) if opts.profile.is_none() => Profile::default(),
        Err(e) => return Err(e),
    };

    profile.apply_env();
    Ok(profile)
}
