//! Rust client for the Lacework API v2
//!
//! ```no_run
//! # async fn run() -> lacework_sdk::Result<()> {
//! let client = lacework_sdk::Client::builder("acme")
//!     .api_keys("ACME_1234", "_secret")
//!     .build()?;
//!
//! for token in client.agent_access_tokens().list().await? {
//!     println!("{} {}", token.token_alias, token.pretty_state());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod severity;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Error, ErrorResponse, Result};
pub use severity::Severity;
