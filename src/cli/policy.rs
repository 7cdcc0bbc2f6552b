//! Policy management commands

use std::path::Path;

use clap::Args;
use lacework_sdk::client::models::parse_new_policy;
use lacework_sdk::{Error, Result, severity};
use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::models::PolicyDisplay;
use crate::output::{Formattable, print_item};

/// Policy list filters
#[derive(Debug, Clone, Args, Default)]
pub struct PolicyListArgs {
    /// Only show policies at or above this severity
    #[arg(long)]
    pub severity: Option<String>,

    /// Only show policies carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only show enabled policies
    #[arg(long)]
    pub enabled: bool,
}

/// Run the policy list command
pub async fn list(opts: &GlobalOptions, args: &PolicyListArgs) -> Result<()> {
    if let Some(threshold) = args.severity.as_deref() {
        if !severity::is_valid(threshold) {
            return Err(Error::invalid_input(format!(
                "invalid severity '{}', valid: {}",
                threshold,
                severity::valid_severities_string()
            )));
        }
    }

    let ctx = CommandContext::new(opts).await?;
    let mut policies = ctx.client.policies().list().await?;
    debug!("Fetched {} policies", policies.len());

    policies.retain(|p| {
        args.severity
            .as_deref()
            .is_none_or(|threshold| !severity::should_filter(&p.severity, threshold))
            && args.tag.as_deref().is_none_or(|tag| p.has_tag(tag))
            && (!args.enabled || p.enabled)
    });
    severity::sort_by_severity(&mut policies);

    let rows: Vec<PolicyDisplay> = policies.into_iter().map(PolicyDisplay::from).collect();
    rows.print(ctx.format)
}

pub async fn show(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let policy = ctx.client.policies().get(id).await?;

    print_item(&policy, PolicyDisplay::from(policy.clone()), ctx.format)?;
    if ctx.format == OutputFormat::Table && !policy.description.is_empty() {
        println!("\n{}", policy.description);
    }
    Ok(())
}

/// Create a policy from a JSON or YAML file
pub async fn create(opts: &GlobalOptions, file: &Path) -> Result<()> {
    let blob = std::fs::read_to_string(file)?;
    let new_policy = parse_new_policy(&blob)?;

    let ctx = CommandContext::new(opts).await?;
    let policy = ctx.client.policies().create(&new_policy).await?;

    match ctx.format {
        OutputFormat::Json => print_item(&policy, PolicyDisplay::from(policy.clone()), ctx.format),
        OutputFormat::Table => {
            println!("The policy {} was created.", policy.policy_id);
            Ok(())
        }
    }
}

pub async fn delete(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.client.policies().delete(id).await?;

    if ctx.format == OutputFormat::Table {
        println!("The policy {} was deleted.", id);
    }
    Ok(())
}
