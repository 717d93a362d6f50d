//! Time-range selector and its multiplier table.
//!
//! Recruiter counts are a one-month baseline. No per-event timestamps exist,
//! so a window is simulated by scaling that baseline: down for shorter
//! windows, up for longer ones. The same multiplier scales the scoring
//! target, which keeps scores rate-normalized across windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "7D")]
    SevenDays,
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    AllTime,
}

impl TimeRange {
    /// Every range, shortest first.
    pub const ALL_RANGES: [TimeRange; 7] = [
        TimeRange::OneDay,
        TimeRange::SevenDays,
        TimeRange::OneMonth,
        TimeRange::ThreeMonths,
        TimeRange::SixMonths,
        TimeRange::OneYear,
        TimeRange::AllTime,
    ];

    /// Multiplier relative to the one-month baseline.
    pub fn multiplier(self) -> f64 {
        match self {
            TimeRange::OneDay => 1.0 / 30.0,
            TimeRange::SevenDays => 0.25,
            TimeRange::OneMonth => 1.0,
            TimeRange::ThreeMonths => 3.0,
            TimeRange::SixMonths => 6.0,
            TimeRange::OneYear => 12.0,
            TimeRange::AllTime => 18.0,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            TimeRange::OneDay => "1D",
            TimeRange::SevenDays => "7D",
            TimeRange::OneMonth => "1M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::SixMonths => "6M",
            TimeRange::OneYear => "1Y",
            TimeRange::AllTime => "ALL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::OneDay => "Last 24 hours",
            TimeRange::SevenDays => "Last 7 days",
            TimeRange::OneMonth => "Last month",
            TimeRange::ThreeMonths => "Last 3 months",
            TimeRange::SixMonths => "Last 6 months",
            TimeRange::OneYear => "Last year",
            TimeRange::AllTime => "All time",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown time range '{0}' (expected one of 1D, 7D, 1M, 3M, 6M, 1Y, ALL)")]
pub struct UnknownTimeRange(pub String);

impl FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_uppercase();
        TimeRange::ALL_RANGES
            .into_iter()
            .find(|r| r.tag() == tag)
            .ok_or_else(|| UnknownTimeRange(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_non_decreasing() {
        for pair in TimeRange::ALL_RANGES.windows(2) {
            assert!(
                pair[0].multiplier() <= pair[1].multiplier(),
                "{} > {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_multipliers_strictly_positive() {
        assert!(TimeRange::ALL_RANGES.iter().all(|r| r.multiplier() > 0.0));
    }

    #[test]
    fn test_known_multiplier_values() {
        assert_eq!(TimeRange::SevenDays.multiplier(), 0.25);
        assert_eq!(TimeRange::OneMonth.multiplier(), 1.0);
        assert_eq!(TimeRange::OneYear.multiplier(), 12.0);
        assert_eq!(TimeRange::AllTime.multiplier(), 18.0);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("1y".parse::<TimeRange>().unwrap(), TimeRange::OneYear);
        assert_eq!(" all ".parse::<TimeRange>().unwrap(), TimeRange::AllTime);
        assert_eq!("7D".parse::<TimeRange>().unwrap(), TimeRange::SevenDays);
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "2W".parse::<TimeRange>().unwrap_err();
        assert_eq!(err, UnknownTimeRange("2W".to_string()));
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&TimeRange::ThreeMonths).unwrap(), "\"3M\"");
        let parsed: TimeRange = serde_json::from_str("\"1D\"").unwrap();
        assert_eq!(parsed, TimeRange::OneDay);
    }

    #[test]
    fn test_default_is_one_month() {
        assert_eq!(TimeRange::default(), TimeRange::OneMonth);
    }
}
