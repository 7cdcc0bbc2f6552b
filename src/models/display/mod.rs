//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod access_token;
mod alert;
mod common;
mod policy;
mod team_member;
mod vulnerability;

pub use access_token::AccessTokenDisplay;
pub use alert::AlertDisplay;
pub use policy::PolicyDisplay;
pub use team_member::TeamMemberDisplay;
pub use vulnerability::VulnerabilityDisplay;
