//! Team member service

use reqwest::Method;

use crate::client::Client;
use crate::client::api::escape;
use crate::client::models::{Envelope, Filter, SearchFilter, TeamMember};
use crate::error::{Error, Result};

const TEAM_MEMBERS_PATH: &str = "TeamMembers";
const TEAM_MEMBERS_SEARCH_PATH: &str = "TeamMembers/search";

/// Manage the users of an account
pub struct TeamMembers<'a> {
    client: &'a Client,
}

impl<'a> TeamMembers<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    pub async fn list(&self) -> Result<Vec<TeamMember>> {
        let resp: Envelope<Vec<TeamMember>> = self
            .client
            .request_decoder(Method::GET, TEAM_MEMBERS_PATH, None)
            .await?;
        Ok(resp.data)
    }

    pub async fn get(&self, guid: &str) -> Result<TeamMember> {
        let path = member_path(guid)?;
        let resp: Envelope<TeamMember> =
            self.client.request_decoder(Method::GET, &path, None).await?;
        Ok(resp.data)
    }

    /// Find members by their login email
    pub async fn search_username(&self, username: &str) -> Result<Vec<TeamMember>> {
        let filter = SearchFilter::with_filter(Filter::eq("userName", username));
        let resp: Envelope<Vec<TeamMember>> = self
            .client
            .request_encoder_decoder(Method::POST, TEAM_MEMBERS_SEARCH_PATH, &filter)
            .await?;
        Ok(resp.data)
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    pub async fn create(&self, member: &TeamMember) -> Result<TeamMember> {
        let resp: Envelope<TeamMember> = self
            .client
            .request_encoder_decoder(Method::POST, TEAM_MEMBERS_PATH, member)
            .await?;
        Ok(resp.data)
    }

    /// Patch the member identified by `member.user_guid`.
    ///
    /// Server managed fields are cleared from the body.
    pub async fn update(&self, member: &TeamMember) -> Result<TeamMember> {
        let path = member_path(&member.user_guid)?;

        let mut body = member.clone();
        body.user_guid.clear();
        body.cust_guid.clear();
        body.props.created_time.clear();
        body.props.last_login_time.clear();
        body.props.last_session_created_time.clear();
        body.props.updated_by.clear();
        body.props.updated_time.clear();

        let resp: Envelope<TeamMember> = self
            .client
            .request_encoder_decoder(Method::PATCH, &path, &body)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete(&self, guid: &str) -> Result<()> {
        let path = member_path(guid)?;
        self.client.request_discard(Method::DELETE, &path, None).await
    }
}

fn member_path(guid: &str) -> Result<String> {
    if guid.is_empty() {
        return Err(Error::invalid_input("please specify a guid"));
    }
    Ok(format!("{}/{}", TEAM_MEMBERS_PATH, escape(guid)))
}
