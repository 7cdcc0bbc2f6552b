//! Team member display model

use lacework_sdk::client::models::TeamMember;
use serde::Serialize;
use tabled::Tabled;

use super::common::format_as_iso_datetime;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamMemberDisplay {
    #[tabled(rename = "GUID")]
    pub guid: String,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    /// First and last name
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ADMIN")]
    pub admin: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "LAST LOGIN")]
    pub last_login: String,
}

impl From<TeamMember> for TeamMemberDisplay {
    fn from(member: TeamMember) -> Self {
        let name = format!("{} {}", member.props.first_name, member.props.last_name)
            .trim()
            .to_string();

        Self {
            state: if member.is_enabled() { "Enabled" } else { "Disabled" }.to_string(),
            guid: member.user_guid,
            username: member.user_name,
            name: if name.is_empty() { "--".to_string() } else { name },
            admin: if member.props.account_admin { "yes" } else { "no" }.to_string(),
            last_login: format_as_iso_datetime(&member.props.last_login_time),
        }
    }
}
