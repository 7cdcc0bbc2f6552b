//! Raw API command: send any request through the authenticated pipeline

use clap::Args;
use lacework_sdk::{Error, Result};
use reqwest::Method;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;

#[derive(Debug, Clone, Args)]
pub struct ApiArgs {
    /// HTTP method (get, post, put, patch, delete)
    pub method: String,

    /// Endpoint relative to `/api/v2/`, e.g. `AgentAccessTokens`
    pub path: String,

    /// JSON request body
    #[arg(long, short)]
    pub data: Option<String>,
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        _ => Err(Error::invalid_input(format!(
            "unsupported method '{}', valid: get, post, put, patch, delete",
            method
        ))),
    }
}

/// Send the request and pretty print the JSON response
pub async fn run(opts: &GlobalOptions, args: &ApiArgs) -> Result<()> {
    let method = parse_method(&args.method)?;

    let body = match &args.data {
        Some(data) => {
            let value: serde_json::Value = serde_json::from_str(data)
                .map_err(|e| Error::invalid_input(format!("--data must be valid JSON: {}", e)))?;
            Some(serde_json::to_vec(&value)?)
        }
        None => None,
    };

    let ctx = CommandContext::new(opts).await?;
    let request = ctx.client.new_request(method, &args.path, body).await?;
    let response = ctx.client.do_request(request).await?;
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(());
    }

    match serde_json::from_slice::<serde_json::Value>(&bytes) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{}", String::from_utf8_lossy(&bytes)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method() {
        assert_eq!(parse_method("get").unwrap(), Method::GET);
        assert_eq!(parse_method("Patch").unwrap(), Method::PATCH);
        assert!(parse_method("TRACE").is_err());
    }
}
