//! Vulnerability commands

use clap::Args;
use lacework_sdk::client::models::{SearchFilter, TimeFilter};
use lacework_sdk::{Error, Result, severity};
use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::models::VulnerabilityDisplay;
use crate::output::Formattable;

#[derive(Debug, Clone, Args, Default)]
pub struct ContainerListArgs {
    /// Assessment window in days
    #[arg(long, default_value_t = 7)]
    pub days: i64,

    /// Only show vulnerabilities at or above this severity
    #[arg(long)]
    pub severity: Option<String>,

    /// Only show vulnerabilities with a fix available
    #[arg(long)]
    pub fixable: bool,
}

pub async fn list_containers(opts: &GlobalOptions, args: &ContainerListArgs) -> Result<()> {
    if args.days < 1 {
        return Err(Error::invalid_input("--days must be at least 1"));
    }
    if let Some(threshold) = args.severity.as_deref() {
        if !severity::is_valid(threshold) {
            return Err(Error::invalid_input(format!(
                "invalid severity '{}', valid: {}",
                threshold,
                severity::valid_severities_string()
            )));
        }
    }

    let filter = SearchFilter {
        time_filter: Some(TimeFilter::last_days(args.days)?),
        ..Default::default()
    };

    let ctx = CommandContext::new(opts).await?;
    let mut resp = ctx
        .client
        .vulnerabilities()
        .search_containers_all_pages(&filter)
        .await?;
    debug!("Fetched {} container vulnerabilities", resp.data.len());

    resp.data.retain(|v| {
        args.severity
            .as_deref()
            .is_none_or(|threshold| !severity::should_filter(&v.severity, threshold))
            && (!args.fixable || v.fix_available())
    });
    severity::sort_by_severity(&mut resp.data);

    let rows: Vec<VulnerabilityDisplay> =
        resp.data.into_iter().map(VulnerabilityDisplay::from).collect();
    rows.print(ctx.format)
}
