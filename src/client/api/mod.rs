//! Resource services built on the request pipeline
//!
//! Each service is a cheap borrowed view over a [`Client`]:
//! - [`AgentAccessTokens`] - agent token management
//! - [`Alerts`] - alert listing, details and comments
//! - [`TeamMembers`] - account users
//! - [`Policies`] / [`PolicyExceptions`] - policy management
//! - [`ReportRules`] - report email routing
//! - [`Recommendations`] / [`Suppressions`] - compliance configuration
//! - [`Reports`] - compliance reports, JSON or PDF
//! - [`Vulnerabilities`] - container vulnerability search

mod agent_access_tokens;
mod alerts;
mod policies;
mod recommendations;
mod report_rules;
mod reports;
mod suppressions;
mod team_members;
mod vulnerabilities;

pub use agent_access_tokens::AgentAccessTokens;
pub use alerts::{AlertScope, Alerts};
pub use policies::{Policies, PolicyExceptions};
pub use recommendations::Recommendations;
pub use report_rules::ReportRules;
pub use reports::Reports;
pub use suppressions::Suppressions;
pub use team_members::TeamMembers;
pub use vulnerabilities::Vulnerabilities;

use super::Client;

/// Percent-encode a caller supplied identifier so it stays a single path
/// segment or query value
pub(crate) fn escape(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl Client {
    pub fn agent_access_tokens(&self) -> AgentAccessTokens<'_> {
        AgentAccessTokens::new(self)
    }

    pub fn alerts(&self) -> Alerts<'_> {
        Alerts::new(self)
    }

    pub fn team_members(&self) -> TeamMembers<'_> {
        TeamMembers::new(self)
    }

    pub fn policies(&self) -> Policies<'_> {
        Policies::new(self)
    }

    pub fn policy_exceptions(&self) -> PolicyExceptions<'_> {
        PolicyExceptions::new(self)
    }

    pub fn report_rules(&self) -> ReportRules<'_> {
        ReportRules::new(self)
    }

    pub fn recommendations(&self) -> Recommendations<'_> {
        Recommendations::new(self)
    }

    pub fn suppressions(&self) -> Suppressions<'_> {
        Suppressions::new(self)
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports::new(self)
    }

    pub fn vulnerabilities(&self) -> Vulnerabilities<'_> {
        Vulnerabilities::new(self)
    }
}
