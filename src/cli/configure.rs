//! Configure command: store credentials in a profile

use clap::Args;
use lacework_sdk::Result;
use lacework_sdk::config::Profile;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

#[derive(Debug, Clone, Args)]
pub struct ConfigureArgs {
    /// Account subdomain (`acme` or `acme.lacework.net`)
    #[arg(long, short)]
    pub account: String,

    /// Sub-account inside an organization
    #[arg(long)]
    pub subaccount: Option<String>,

    /// API access key ID
    #[arg(long, short = 'k')]
    pub api_key: String,

    /// API secret key
    #[arg(long, short = 's')]
    pub api_secret: String,
}

pub fn run(opts: &GlobalOptions, args: &ConfigureArgs) -> Result<()> {
    let mut config = opts.load_config()?;

    let profile = Profile {
        account: args.account.trim().to_string(),
        subaccount: args
            .subaccount
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        api_key: args.api_key.trim().to_string(),
        api_secret: args.api_secret.trim().to_string(),
    };
    profile.verify()?;

    let name = opts.profile_name();
    config.set_profile(name, profile);
    opts.save_config(&config)?;

    if opts.format == OutputFormat::Table {
        println!("You are all set! Profile '{}' saved.", name);
    }
    Ok(())
}
