use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unit of bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        };
        f.write_str(name)
    }
}

/// Trailing chart window selectable by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartRange {
    /// Last 30 days
    Days,
    /// Last 12 weeks
    #[default]
    Weeks,
    /// Last 12 months
    Months,
    /// Last 5 years
    Years,
}

impl ChartRange {
    pub const ALL: [ChartRange; 4] = [
        ChartRange::Days,
        ChartRange::Weeks,
        ChartRange::Months,
        ChartRange::Years,
    ];

    pub const fn granularity(self) -> Granularity {
        match self {
            ChartRange::Days => Granularity::Day,
            ChartRange::Weeks => Granularity::Week,
            ChartRange::Months => Granularity::Month,
            ChartRange::Years => Granularity::Year,
        }
    }

    pub const fn bucket_count(self) -> u32 {
        match self {
            ChartRange::Days => 30,
            ChartRange::Weeks => 12,
            ChartRange::Months => 12,
            ChartRange::Years => 5,
        }
    }

    pub const fn window(self) -> Window {
        Window {
            granularity: self.granularity(),
            bucket_count: self.bucket_count(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ChartRange::Days => "days",
            ChartRange::Weeks => "weeks",
            ChartRange::Months => "months",
            ChartRange::Years => "years",
        }
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chart range '{0}' (expected days, weeks, months or years)")]
pub struct ParseRangeError(String);

impl FromStr for ChartRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" | "day" | "d" => Ok(ChartRange::Days),
            "weeks" | "week" | "w" => Ok(ChartRange::Weeks),
            "months" | "month" | "m" => Ok(ChartRange::Months),
            "years" | "year" | "y" => Ok(ChartRange::Years),
            _ => Err(ParseRangeError(s.to_string())),
        }
    }
}

/// Granularity plus the number of trailing buckets, ending at the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub granularity: Granularity,
    pub bucket_count: u32,
}

impl Window {
    /// A window always covers at least the current period.
    pub fn new(granularity: Granularity, bucket_count: u32) -> Self {
        Self {
            granularity,
            bucket_count: bucket_count.max(1),
        }
    }
}

impl From<ChartRange> for Window {
    fn from(range: ChartRange) -> Self {
        range.window()
    }
}
