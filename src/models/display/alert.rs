//! Alert display model

use lacework_sdk::client::models::Alert;
use serde::Serialize;
use tabled::Tabled;

use super::common::{format_as_iso_datetime, truncate_string};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AlertDisplay {
    #[tabled(rename = "ALERT ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    #[tabled(rename = "START TIME")]
    pub start_time: String,

    #[tabled(rename = "END TIME")]
    pub end_time: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Alert> for AlertDisplay {
    fn from(alert: Alert) -> Self {
        Self {
            id: alert.id,
            name: truncate_string(&alert.name, 60),
            severity: alert.severity,
            start_time: format_as_iso_datetime(&alert.start_time),
            end_time: format_as_iso_datetime(&alert.end_time),
            status: alert.status,
        }
    }
}
