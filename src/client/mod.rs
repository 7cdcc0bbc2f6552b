//! Lacework API v2 client
//!
//! The request pipeline lives in a handful of `impl Client` blocks:
//! - `auth` - access token exchange and caching
//! - `transport` - request construction and execution
//! - `response` - status checking and body decoding
//! - [`pagination`] - next-page traversal
//!
//! Resource services built on top of it are in [`api`].

pub mod api;
mod auth;
mod lacework;
pub mod models;
pub mod pagination;
mod response;
mod transport;

pub use auth::{TokenData, TokenResponse};
pub use lacework::{
    API_VERSION, Client, ClientBuilder, DEFAULT_TIMEOUT, DEFAULT_TOKEN_EXPIRATION, LOG_LEVEL_ENV,
};
pub use pagination::{Pageable, V2Pagination};
