//! Team member commands

use lacework_sdk::Result;
use lacework_sdk::client::models::TeamMember;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat};
use crate::models::TeamMemberDisplay;
use crate::output::print_item;

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<TeamMember, TeamMemberDisplay, _, _>(
        opts,
        "team members",
        |client| async move { client.team_members().list().await },
    )
    .await
}

pub async fn show(opts: &GlobalOptions, guid: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let member = ctx.client.team_members().get(guid).await?;
    print_item(&member, TeamMemberDisplay::from(member.clone()), ctx.format)
}

pub async fn delete(opts: &GlobalOptions, guid: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.client.team_members().delete(guid).await?;

    if ctx.format == OutputFormat::Table {
        println!("Team member {} deleted.", guid);
    }
    Ok(())
}
