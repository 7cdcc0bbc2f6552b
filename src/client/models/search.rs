//! Search request filters shared by the `*/search` endpoints

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Time window of a search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

impl TimeFilter {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start_time: Some(start),
            end_time: Some(end),
        }
    }

    /// Window from `days` ago until now
    pub fn last_days(days: i64) -> Result<Self> {
        let end = Utc::now();
        Ok(Self::new(days_before(end, days)?, end))
    }

    /// A start after the end is rejected before anything is sent
    pub fn validate(&self) -> Result<()> {
        validate_range(self.start_time, self.end_time)
    }
}

/// `end` minus `days`, failing instead of overflowing
pub fn days_before(end: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>> {
    TimeDelta::try_days(days)
        .and_then(|delta| end.checked_sub_signed(delta))
        .ok_or_else(|| Error::invalid_input(format!("{} days is out of range", days)))
}

/// Reject ranges whose start comes after their end
pub fn validate_range(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Result<()> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(Error::invalid_input(
            "date range should have a start time before the end time",
        )),
        _ => Ok(()),
    }
}

/// Single field condition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Comparison such as `eq`, `ne`, `in`, `rlike`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expression: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Filter {
    /// `field == value`
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            expression: "eq".to_string(),
            field: field.into(),
            value: value.into(),
            values: Vec::new(),
        }
    }
}

/// Body of a search call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_filter: Option<TimeFilter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub returns: Vec<String>,
}

impl SearchFilter {
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            filters: vec![filter],
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        match &self.time_filter {
            Some(tf) => tf.validate(),
            None => Ok(()),
        }
    }
}
