//! Reporting configuration
//!
//! Controls how timestamps are mapped onto calendar days and where a week
//! begins. Both values are passed explicitly. Only [`ReportZone::Local`]
//! consults the host timezone database, and it never reads the clock.

use crate::types::AnalyticsError;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc, Weekday};

/// Timezone that offset-bearing timestamps are converted into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportZone {
    /// The host's local timezone, resolved per instant so daylight saving
    /// transitions are honoured
    Local,

    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

impl ReportZone {
    /// Fixed zone at UTC
    pub fn utc() -> Self {
        ReportZone::Fixed(Utc.fix())
    }

    /// Wall-clock time of `instant` in this zone
    pub fn localize(&self, instant: DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            ReportZone::Local => instant.with_timezone(&Local).naive_local(),
            ReportZone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }
}

impl From<FixedOffset> for ReportZone {
    fn from(offset: FixedOffset) -> Self {
        ReportZone::Fixed(offset)
    }
}

/// Settings shared by ingestion and the bucketing functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Reporting timezone
    ///
    /// Timestamps carrying their own offset are converted into this zone
    /// before they reach the engine.
    pub zone: ReportZone,

    /// First day of the week for the daily series
    pub week_start: Weekday,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            zone: ReportZone::utc(),
            week_start: Weekday::Sun,
        }
    }
}

impl ReportConfig {
    /// Create a ReportConfig with custom values
    pub fn new(zone: ReportZone, week_start: Weekday) -> Self {
        Self { zone, week_start }
    }
}

/// Parse an offset of the form `+HH:MM`, `-HH:MM`, `+HHMM`, `Z` or `UTC`
///
/// # Errors
///
/// Returns `InvalidConfig` for anything chrono does not accept as an offset.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, AnalyticsError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    value
        .parse::<FixedOffset>()
        .map_err(|e| AnalyticsError::invalid_config("utc offset", format!("'{}': {}", value, e)))
}
