//! Alert commands

use chrono::{DateTime, Utc};
use clap::Args;
use lacework_sdk::client::api::AlertScope;
use lacework_sdk::client::models::{Alert, VALID_ALERT_STATUSES, days_before};
use lacework_sdk::{Error, Result, severity};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::models::AlertDisplay;
use crate::output::{Formattable, print_item, render_json};

/// Alert list filters
#[derive(Debug, Clone, Args, Default)]
pub struct AlertListArgs {
    /// Window start (RFC 3339); defaults to `--days` before the end
    #[arg(long)]
    pub start: Option<DateTime<Utc>>,

    /// Window end (RFC 3339); defaults to now
    #[arg(long)]
    pub end: Option<DateTime<Utc>>,

    /// Window length in days when no start is given
    #[arg(long, default_value_t = 1)]
    pub days: i64,

    /// Only show alerts at or above this severity
    #[arg(long)]
    pub severity: Option<String>,

    /// Only show alerts in this status (Open, Closed)
    #[arg(long)]
    pub status: Option<String>,

    /// Maximum number of alerts to show
    #[arg(long)]
    pub limit: Option<usize>,
}

impl AlertListArgs {
    fn window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let end = self.end.unwrap_or_else(Utc::now);
        let start = match self.start {
            Some(start) => start,
            None => days_before(end, self.days)?,
        };
        Ok((start, end))
    }

    fn validate(&self) -> Result<()> {
        if let Some(threshold) = &self.severity {
            if !severity::is_valid(threshold) {
                return Err(Error::invalid_input(format!(
                    "invalid severity '{}', valid: {}",
                    threshold,
                    severity::valid_severities_string()
                )));
            }
        }
        if let Some(status) = &self.status {
            if !VALID_ALERT_STATUSES
                .iter()
                .any(|s| s.eq_ignore_ascii_case(status))
            {
                return Err(Error::invalid_input(format!(
                    "invalid status '{}', valid: {}",
                    status,
                    VALID_ALERT_STATUSES.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Apply the severity and status filters
    fn keep(&self, alert: &Alert) -> bool {
        let severity_ok = self
            .severity
            .as_deref()
            .is_none_or(|threshold| !severity::should_filter(&alert.severity, threshold));
        let status_ok = self
            .status
            .as_deref()
            .is_none_or(|status| alert.status.eq_ignore_ascii_case(status));
        severity_ok && status_ok
    }
}

pub async fn list(opts: &GlobalOptions, args: &AlertListArgs) -> Result<()> {
    args.validate()?;
    let (start, end) = args.window()?;

    let ctx = CommandContext::new(opts).await?;
    debug!("Fetching alerts from {} to {}", start, end);
    let mut alerts = ctx.client.alerts().list_all_by_time(start, end).await?;
    alerts.sort_by_severity();

    let rows: Vec<AlertDisplay> = alerts
        .data
        .into_iter()
        .filter(|alert| args.keep(alert))
        .take(args.limit.unwrap_or(usize::MAX))
        .map(AlertDisplay::from)
        .collect();
    rows.print(ctx.format)
}

pub async fn show(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let details = ctx.client.alerts().get_details(id, AlertScope::Details).await?;

    print_item(&details, AlertDisplay::from(details.alert.clone()), ctx.format)?;
    if ctx.format == OutputFormat::Table && !details.alert.info.description.is_empty() {
        println!("\n{}", details.alert.info.description);
    }
    Ok(())
}

pub async fn comment(opts: &GlobalOptions, id: i64, comment: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let entry = ctx.client.alerts().comment(id, comment).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", render_json(&entry)?),
        OutputFormat::Table => println!("Comment added to alert {}.", id),
    }
    Ok(())
}
