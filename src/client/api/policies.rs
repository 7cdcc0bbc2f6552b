//! Policy and policy exception services

use reqwest::Method;

use crate::client::Client;
use crate::client::api::escape;
use crate::client::models::{
    BulkUpdatePolicy, Envelope, NewPolicy, Policy, PolicyException, UpdatePolicy,
};
use crate::error::{Error, Result};

const POLICIES_PATH: &str = "Policies";
const POLICY_TAGS_PATH: &str = "Policies/Tags";
const EXCEPTIONS_PATH: &str = "Exceptions";

/// Manage detection policies
pub struct Policies<'a> {
    client: &'a Client,
}

impl<'a> Policies<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    // ========================================================================
    // Read Operations
    // ========================================================================

    pub async fn list(&self) -> Result<Vec<Policy>> {
        let resp: Envelope<Vec<Policy>> = self
            .client
            .request_decoder(Method::GET, POLICIES_PATH, None)
            .await?;
        Ok(resp.data)
    }

    /// Every tag used by at least one policy
    pub async fn list_tags(&self) -> Result<Vec<String>> {
        let resp: Envelope<Vec<String>> = self
            .client
            .request_decoder(Method::GET, POLICY_TAGS_PATH, None)
            .await?;
        Ok(resp.data)
    }

    pub async fn get(&self, policy_id: &str) -> Result<Policy> {
        let path = policy_path(policy_id)?;
        let resp: Envelope<Policy> =
            self.client.request_decoder(Method::GET, &path, None).await?;
        Ok(resp.data)
    }

    // ========================================================================
    // Write Operations
    // ========================================================================

    pub async fn create(&self, policy: &NewPolicy) -> Result<Policy> {
        let resp: Envelope<Policy> = self
            .client
            .request_encoder_decoder(Method::POST, POLICIES_PATH, policy)
            .await?;
        Ok(resp.data)
    }

    pub async fn update(&self, policy_id: &str, policy: &UpdatePolicy) -> Result<Policy> {
        let path = policy_path(policy_id)?;
        let resp: Envelope<Policy> = self
            .client
            .request_encoder_decoder(Method::PATCH, &path, policy)
            .await?;
        Ok(resp.data)
    }

    /// Toggle state or severity of several policies in one call
    pub async fn update_many(&self, policies: &[BulkUpdatePolicy]) -> Result<Vec<Policy>> {
        let resp: Envelope<Vec<Policy>> = self
            .client
            .request_encoder_decoder(Method::PATCH, POLICIES_PATH, policies)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete(&self, policy_id: &str) -> Result<()> {
        let path = policy_path(policy_id)?;
        self.client.request_discard(Method::DELETE, &path, None).await
    }
}

fn policy_path(policy_id: &str) -> Result<String> {
    if policy_id.is_empty() {
        return Err(Error::invalid_input("specify a policy ID"));
    }
    Ok(format!("{}/{}", POLICIES_PATH, escape(policy_id)))
}

/// Manage the exceptions attached to a policy
pub struct PolicyExceptions<'a> {
    client: &'a Client,
}

impl<'a> PolicyExceptions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, policy_id: &str) -> Result<Vec<PolicyException>> {
        if policy_id.is_empty() {
            return Err(Error::invalid_input("specify a policy ID"));
        }
        let path = format!("{}?policyId={}", EXCEPTIONS_PATH, escape(policy_id));
        let resp: Envelope<Vec<PolicyException>> =
            self.client.request_decoder(Method::GET, &path, None).await?;
        Ok(resp.data)
    }

    pub async fn get(&self, policy_id: &str, exception_id: &str) -> Result<PolicyException> {
        let path = exception_path(policy_id, exception_id)?;
        let resp: Envelope<PolicyException> =
            self.client.request_decoder(Method::GET, &path, None).await?;
        Ok(resp.data)
    }

    pub async fn create(
        &self,
        policy_id: &str,
        exception: &PolicyException,
    ) -> Result<PolicyException> {
        if policy_id.is_empty() {
            return Err(Error::invalid_input("specify a policy ID"));
        }
        let path = format!("{}?policyId={}", EXCEPTIONS_PATH, escape(policy_id));
        let resp: Envelope<PolicyException> = self
            .client
            .request_encoder_decoder(Method::POST, &path, exception)
            .await?;
        Ok(resp.data)
    }

    /// Replace the exception identified by `exception.exception_id`.
    ///
    /// Server managed fields are stripped from the body.
    pub async fn update(
        &self,
        policy_id: &str,
        exception: &PolicyException,
    ) -> Result<PolicyException> {
        let path = exception_path(policy_id, &exception.exception_id)?;

        let mut body = exception.clone();
        body.exception_id.clear();
        body.last_update_time.clear();
        body.last_update_user.clear();

        let resp: Envelope<PolicyException> = self
            .client
            .request_encoder_decoder(Method::PATCH, &path, &body)
            .await?;
        Ok(resp.data)
    }

    pub async fn delete(&self, policy_id: &str, exception_id: &str) -> Result<()> {
        let path = exception_path(policy_id, exception_id)?;
        self.client.request_discard(Method::DELETE, &path, None).await
    }
}

fn exception_path(policy_id: &str, exception_id: &str) -> Result<String> {
    if policy_id.is_empty() || exception_id.is_empty() {
        return Err(Error::invalid_input("specify exception and policy IDs"));
    }
    Ok(format!(
        "{}/{}?policyId={}",
        EXCEPTIONS_PATH,
        escape(exception_id),
        escape(policy_id)
    ))
}
