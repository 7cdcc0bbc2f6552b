//! Agent access token commands

use lacework_sdk::Result;
use lacework_sdk::client::models::AgentAccessToken;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::models::AccessTokenDisplay;
use crate::output::print_item;

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<AgentAccessToken, AccessTokenDisplay, _, _>(
        opts,
        "agent access tokens",
        |client| async move { client.agent_access_tokens().list().await },
    )
    .await
}

pub async fn show(opts: &GlobalOptions, token: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let token = ctx.client.agent_access_tokens().get(token).await?;
    print_item(&token, AccessTokenDisplay::from(token.clone()), ctx.format)
}

pub async fn create(opts: &GlobalOptions, alias: &str, description: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let token = ctx
        .client
        .agent_access_tokens()
        .create(alias, description)
        .await?;
    print_item(&token, AccessTokenDisplay::from(token.clone()), ctx.format)
}

/// Enable or disable a token
pub async fn set_state(opts: &GlobalOptions, token: &str, enable: bool) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let token = ctx
        .client
        .agent_access_tokens()
        .update_state(token, enable)
        .await?;
    print_item(&token, AccessTokenDisplay::from(token.clone()), ctx.format)
}
