//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod access_token;
pub mod alert;
pub mod api;
pub mod args;
pub mod configure;
pub mod context;
pub mod handlers;
pub mod policy;
pub mod report;
pub mod team_member;
pub mod vulnerability;

pub use args::OutputFormat;
pub use context::CommandContext;

/// Lacework CLI - command line companion for the Lacework API v2
#[derive(Parser, Debug)]
#[command(name = "lacework")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "LW_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Profile to use from the config file
    #[arg(short, long, global = true, env = "LW_PROFILE", hide_env = true)]
    pub profile: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "LW_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Log every request and response
    #[arg(long, global = true, env = "LW_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Base URL override for development/testing
    #[arg(long, global = true, env = "LW_API_URL", hide = true)]
    pub api_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store credentials in a profile
    Configure(configure::ConfigureArgs),

    /// Send an authenticated request to any API v2 endpoint
    Api(api::ApiArgs),

    /// Manage agent access tokens
    #[command(subcommand)]
    AccessToken(AccessTokenCommands),

    /// Manage team members
    #[command(subcommand)]
    TeamMember(TeamMemberCommands),

    /// Inspect and comment on alerts
    #[command(subcommand)]
    Alert(AlertCommands),

    /// Manage policies
    #[command(subcommand)]
    Policy(PolicyCommands),

    /// Compliance reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Vulnerability assessments
    #[command(subcommand, alias = "vuln")]
    Vulnerability(VulnerabilityCommands),

    /// Display version information
    Version,
}

/// Agent access token subcommands
#[derive(Subcommand, Debug)]
pub enum AccessTokenCommands {
    /// List all agent access tokens
    List,

    /// Show one token
    Show {
        /// Access token
        token: String,
    },

    /// Create an enabled token
    Create {
        /// Token name
        alias: String,

        /// Optional description
        #[arg(long, short, default_value = "")]
        description: String,
    },

    /// Enable a token
    Enable {
        token: String,
    },

    /// Disable a token
    Disable {
        token: String,
    },
}

/// Team member subcommands
#[derive(Subcommand, Debug)]
pub enum TeamMemberCommands {
    /// List all team members
    List,

    /// Show one member
    Show {
        /// Member GUID
        guid: String,
    },

    /// Remove a member
    Delete {
        /// Member GUID
        guid: String,
    },
}

/// Alert subcommands
#[derive(Subcommand, Debug)]
pub enum AlertCommands {
    /// List alerts, most severe first
    List(alert::AlertListArgs),

    /// Show alert details
    Show {
        /// Alert ID
        id: i64,
    },

    /// Add a comment to an alert
    Comment {
        /// Alert ID
        id: i64,

        /// Comment text
        comment: String,
    },
}

/// Policy subcommands
#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    /// List policies
    List(policy::PolicyListArgs),

    /// Show one policy
    Show {
        /// Policy ID
        id: String,
    },

    /// Create a policy from a JSON or YAML file
    Create {
        /// Path to the policy file
        file: PathBuf,
    },

    /// Delete a policy
    Delete {
        /// Policy ID
        id: String,
    },
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Download a compliance report as PDF
    Download(report::DownloadArgs),
}

/// Vulnerability subcommands
#[derive(Subcommand, Debug)]
pub enum VulnerabilityCommands {
    /// Container image vulnerabilities
    #[command(subcommand)]
    Container(ContainerVulnCommands),
}

#[derive(Subcommand, Debug)]
pub enum ContainerVulnCommands {
    /// List vulnerabilities assessed in a recent window
    List(vulnerability::ContainerListArgs),
}
