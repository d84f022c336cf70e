use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::config::FormatterConfig;
use crate::utils::datetime::{format_datetime, is_sentinel, parse_datetime, shift_by_minutes};
use crate::utils::logging::{log_format_fallback, log_unknown_zone};

/// Display zones offered by the filter UI. Each one is a constant offset
/// from UTC with no daylight-saving rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimezoneIdentifier {
    /// Coordinated Universal Time
    #[default]
    Utc,
    /// Indian Standard Time, UTC+5:30
    Ist,
}

impl TimezoneIdentifier {
    /// Every supported zone, in selector order
    pub const ALL: [TimezoneIdentifier; 2] = [TimezoneIdentifier::Utc, TimezoneIdentifier::Ist];

    /// Canonical upper-case name, e.g. `IST`
    pub fn as_str(self) -> &'static str {
        match self {
            TimezoneIdentifier::Utc => "UTC",
            TimezoneIdentifier::Ist => "IST",
        }
    }

    /// Minutes east of UTC
    pub fn offset_minutes(self) -> i32 {
        match self {
            TimezoneIdentifier::Utc => 0,
            TimezoneIdentifier::Ist => 330,
        }
    }

    /// Offset in `UTC+HH:MM` form for zone pickers
    pub fn offset_label(self) -> String {
        let minutes = self.offset_minutes();
        let sign = if minutes < 0 { '-' } else { '+' };
        let minutes = minutes.unsigned_abs();
        format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

impl fmt::Display for TimezoneIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimezoneIdentifier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        TimezoneIdentifier::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("Unknown timezone '{}'", name))
    }
}

/// Start and end of a filter range as displayed. Either bound may be a
/// sentinel for an open-ended range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRange {
    /// Lower bound, `-∞` when open
    pub start: String,
    /// Upper bound, `∞` when open
    pub end: String,
}

impl FilterRange {
    /// Builds a range from its two bounds
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Renders a UTC datetime string in `zone` as `YYYY-MM-DDTHH:mm:ss`.
///
/// Sentinels, UTC requests and anything that fails to parse or shift come
/// back exactly as given.
pub fn format(input: &str, zone: TimezoneIdentifier) -> String {
    if is_sentinel(input) || zone == TimezoneIdentifier::Utc {
        return input.to_string();
    }

    match convert(input, zone) {
        Ok(formatted) => formatted,
        Err(e) => {
            log_format_fallback(input, zone.as_str(), &e.to_string());
            input.to_string()
        }
    }
}

fn convert(input: &str, zone: TimezoneIdentifier) -> Result<String> {
    let instant = parse_datetime(input)?;
    let shifted = shift_by_minutes(instant, zone.offset_minutes())?;
    Ok(format_datetime(&shifted))
}

/// Same as [`format`], with the zone given as the name the UI sends.
/// Unknown names leave the input untouched.
pub fn format_with_zone_name(input: &str, zone_name: &str) -> String {
    match zone_name.parse::<TimezoneIdentifier>() {
        Ok(zone) => format(input, zone),
        Err(e) => {
            log_unknown_zone(zone_name, Some(&e.to_string()));
            input.to_string()
        }
    }
}

/// Formats values in the user's preferred display zone
#[derive(Debug, Clone, Copy, Default)]
pub struct TimezoneFormatter {
    config: FormatterConfig,
}

impl TimezoneFormatter {
    /// Builds a formatter for the given display preferences
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// The configured display zone
    pub fn zone(&self) -> TimezoneIdentifier {
        self.config.default_zone
    }

    /// Formats `input` in the configured display zone
    pub fn format(&self, input: &str) -> String {
        format(input, self.config.default_zone)
    }

    /// Formats `input` in an explicit zone, ignoring the configured one
    pub fn format_in(&self, input: &str, zone: TimezoneIdentifier) -> String {
        format(input, zone)
    }

    /// Formats both bounds of a range; open bounds stay as they are
    pub fn format_range(&self, range: &FilterRange) -> FilterRange {
        FilterRange {
            start: self.format(&range.start),
            end: self.format(&range.end),
        }
    }
}
