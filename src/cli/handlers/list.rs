//! Shared flow for commands that print a collection
//!
//! Build the client, fetch, convert each resource into its display row and
//! print the rows in the requested format.

use std::future::Future;
use std::sync::Arc;

use lacework_sdk::{Client, Result};
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output::Formattable;

/// Fetch a collection with `fetch` and print it as rows of `D`.
///
/// ```ignore
/// run_list_command::<TeamMember, TeamMemberDisplay, _, _>(
///     opts,
///     "team members",
///     |client| async move { client.team_members().list().await },
/// ).await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    what: &str,
    fetch: F,
) -> Result<()>
where
    D: From<T> + Tabled + Serialize,
    Fut: Future<Output = Result<Vec<T>>>,
    F: FnOnce(Arc<Client>) -> Fut,
{
    let ctx = CommandContext::new(opts).await?;

    let resources = fetch(Arc::clone(&ctx.client)).await?;
    debug!("{} {} returned", resources.len(), what);

    let rows: Vec<D> = resources.into_iter().map(D::from).collect();
    rows.print(ctx.format)
}
