//! Lacework severities
//!
//! Severities rank from `Critical` (1) to `Info` (5). Anything that does not
//! map to one of them is `Unknown` (0).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A Lacework severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Unknown = 0,
    Critical = 1,
    High = 2,
    Medium = 3,
    Low = 4,
    Info = 5,
}

/// Valid severities, most critical first
pub const VALID_SEVERITIES: [Severity; 5] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
    Severity::Info,
];

/// Anything that carries a severity string
pub trait HasSeverity {
    fn severity(&self) -> &str;
}

impl Severity {
    /// Parse a severity name or its numeric level. Never fails.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "critical" => Severity::Critical,
            "2" | "high" => Severity::High,
            "3" | "medium" => Severity::Medium,
            "4" | "low" => Severity::Low,
            "5" | "info" => Severity::Info,
            _ => Severity::Unknown,
        }
    }

    /// Numeric level, 0 for unknown
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Display name
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Unknown => "Unknown",
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }

    pub fn is_unknown(self) -> bool {
        self == Severity::Unknown
    }

    /// True when `self` is less critical than `other`
    pub fn not_as_critical_as(self, other: Severity) -> bool {
        self.level() > other.level()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::parse(s))
    }
}

impl Serialize for Severity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::String(s) => Severity::parse(&s),
            serde_json::Value::Number(n) => Severity::parse(&n.to_string()),
            _ => Severity::Unknown,
        })
    }
}

/// Normalized level and name of a severity string
pub fn normalize(s: &str) -> (u8, &'static str) {
    let severity = Severity::parse(s);
    (severity.level(), severity.as_str())
}

/// True when `s` maps to a known severity
pub fn is_valid(s: &str) -> bool {
    !Severity::parse(s).is_unknown()
}

/// `"critical, high, medium, low, info"`
pub fn valid_severities_string() -> String {
    VALID_SEVERITIES
        .iter()
        .map(|s| s.as_str().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// True when `severity` falls below a valid `threshold`.
///
/// An unknown threshold never filters anything.
pub fn should_filter(severity: &str, threshold: &str) -> bool {
    let threshold = Severity::parse(threshold);
    if threshold.is_unknown() {
        return false;
    }
    Severity::parse(severity).not_as_critical_as(threshold)
}

/// Sort from critical to info, unknown first
pub fn sort_by_severity<T: HasSeverity>(items: &mut [T]) {
    items.sort_by_key(|item| Severity::parse(item.severity()).level());
}

/// Sort from info to critical
pub fn sort_by_severity_ascending<T: HasSeverity>(items: &mut [T]) {
    items.sort_by_key(|item| std::cmp::Reverse(Severity::parse(item.severity()).level()));
}
