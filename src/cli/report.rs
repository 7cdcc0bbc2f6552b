//! Compliance report commands

use std::path::PathBuf;

use clap::Args;
use lacework_sdk::client::models::{CloudProvider, ReportConfig};
use lacework_sdk::{Error, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::output::render_json;

#[derive(Debug, Clone, Args)]
pub struct DownloadArgs {
    /// Cloud provider (aws, azure, gcp)
    pub cloud: CloudProvider,

    /// AWS account, Azure tenant or GCP organization
    pub primary_id: String,

    /// Azure subscription or GCP project
    pub secondary_id: Option<String>,

    /// Report type, e.g. AWS_CIS_14
    #[arg(long = "type")]
    pub report_type: Option<String>,

    /// Output file (defaults to `<cloud>_<id>_report.pdf`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl DownloadArgs {
    fn config(&self) -> ReportConfig {
        ReportConfig {
            cloud: self.cloud,
            primary_id: self.primary_id.clone(),
            secondary_id: self.secondary_id.clone(),
            report_type: self.report_type.clone().unwrap_or_default(),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let id = self.secondary_id.as_deref().unwrap_or(&self.primary_id);
            PathBuf::from(format!("{}_{}_report.pdf", self.cloud, id))
        })
    }
}

pub async fn download(opts: &GlobalOptions, args: &DownloadArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let path = args.output_path();
    if path.is_dir() {
        return Err(Error::invalid_input(format!(
            "{} is a directory",
            path.display()
        )));
    }

    let ctx = CommandContext::new(opts).await?;
    let written = ctx.client.reports().download_pdf(&config, &path).await?;

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            render_json(&serde_json::json!({
                "path": path.display().to_string(),
                "bytes": written,
            }))?
        ),
        OutputFormat::Table => println!("The report was downloaded to {}", path.display()),
    }
    Ok(())
}
