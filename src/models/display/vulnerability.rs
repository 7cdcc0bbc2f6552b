//! Container vulnerability display model

use lacework_sdk::client::models::VulnerabilityContainer;
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct VulnerabilityDisplay {
    #[tabled(rename = "CVE")]
    pub cve: String,

    #[tabled(rename = "SEVERITY")]
    pub severity: String,

    #[tabled(rename = "PACKAGE")]
    pub package: String,

    #[tabled(rename = "VERSION")]
    pub version: String,

    #[tabled(rename = "FIXED IN")]
    pub fixed_version: String,

    #[tabled(rename = "IMAGE ID")]
    pub image_id: String,
}

impl From<VulnerabilityContainer> for VulnerabilityDisplay {
    fn from(vuln: VulnerabilityContainer) -> Self {
        let fixed_version = if vuln.fix_available() {
            vuln.fix_info.fixed_version
        } else {
            "--".to_string()
        };

        Self {
            cve: vuln.vuln_id,
            severity: vuln.severity,
            package: vuln.feature_key.name,
            version: vuln.feature_key.version,
            fixed_version,
            image_id: vuln.image_id,
        }
    }
}
