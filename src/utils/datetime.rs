use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Open range boundaries the filter UI uses in place of real timestamps.
pub const SENTINELS: [&str; 3] = ["", "-∞", "∞"];

/// Output pattern for display strings, e.g. `2024-01-02T01:30:00`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Tried after RFC 3339, once a trailing `Z` has been rewritten to `+00:00`.
const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Returns true for the empty string and the infinity markers.
pub fn is_sentinel(input: &str) -> bool {
    SENTINELS.contains(&input)
}

/// Parses UTC-ish datetime text into an absolute instant.
///
/// Text carrying `Z` or `+` is read as already zoned. Text with a `T`
/// separator but no zone is taken as UTC. Anything else gets a direct
/// parse, where date-only and space-separated values are also UTC.
///
/// Surrounding whitespace is ignored. A seconds field of `60` is rejected.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    let dt = if input.contains('Z') || input.contains('+') {
        parse_zoned(input)?
    } else if input.contains('T') {
        parse_zoned(&format!("{}Z", input))?
    } else {
        parse_naive(input)?
    };

    // chrono marks a leap second with a nanosecond count past one second.
    if dt.nanosecond() >= 1_000_000_000 {
        return Err(anyhow!("Leap second in '{}' is not a valid instant", input));
    }

    Ok(dt)
}

fn parse_zoned(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let normalized = match input.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => input.to_string(),
    };

    ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("Unrecognized zoned datetime '{}'", input))
}

fn parse_naive(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("Invalid midnight for '{}'", input))?;
        return Ok(midnight.and_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| anyhow!("Unrecognized datetime '{}'", input))
}

/// Moves an instant by a fixed number of minutes and returns the wall-clock
/// fields at that offset.
pub fn shift_by_minutes(dt: DateTime<Utc>, minutes: i32) -> Result<NaiveDateTime> {
    let offset = minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| anyhow!("Invalid offset of {} minutes", minutes))?;

    dt.naive_utc()
        .checked_add_offset(offset)
        .ok_or_else(|| anyhow!("Shifting {} to {} is out of range", dt, offset))
}

/// Renders wall-clock fields with [`DISPLAY_FORMAT`].
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(input: &str) -> String {
        format_datetime(&parse_datetime(input).unwrap().naive_utc())
    }

    #[test]
    fn test_is_sentinel() {
        assert!(is_sentinel(""));
        assert!(is_sentinel("-∞"));
        assert!(is_sentinel("∞"));
        assert!(!is_sentinel(" "));
        assert!(!is_sentinel("2024-01-01T00:00:00"));
    }

    #[test]
    fn test_parse_without_zone_is_utc() {
        assert_eq!(utc("2024-01-01T10:15:30"), "2024-01-01T10:15:30");
        assert_eq!(utc("2024-01-01T10:15"), "2024-01-01T10:15:00");
    }

    #[test]
    fn test_parse_zoned_inputs() {
        assert_eq!(utc("2024-01-01T10:15:30Z"), "2024-01-01T10:15:30");
        assert_eq!(utc("2024-01-01T10:15:30.250Z"), "2024-01-01T10:15:30");
        assert_eq!(utc("2024-01-01T05:30:00+05:30"), "2024-01-01T00:00:00");
        assert_eq!(utc("2024-01-01T05:30:00+0530"), "2024-01-01T00:00:00");
        assert_eq!(utc("2024-01-01T10:15Z"), "2024-01-01T10:15:00");
    }

    #[test]
    fn test_parse_direct_forms() {
        assert_eq!(utc("2024-03-15"), "2024-03-15T00:00:00");
        assert_eq!(utc("2024-03-15 08:45:00"), "2024-03-15T08:45:00");
        assert_eq!(utc("2024-03-15 08:45"), "2024-03-15T08:45:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_datetime("not-a-date").is_err());
        assert!(parse_datetime("Zulu").is_err());
        assert!(parse_datetime("2024-13-01T00:00:00").is_err());
        assert!(parse_datetime("2023-02-29T00:00:00").is_err());
        assert!(parse_datetime("2024-01-01T25:00:00").is_err());
    }

    #[test]
    fn test_negative_offset_is_not_reinterpreted() {
        // Only `+` offsets are recognised; a `T` value without one gets `Z` appended.
        assert!(parse_datetime("2024-01-01T00:00:00-05:00").is_err());
    }

    #[test]
    fn test_shift_by_minutes() {
        let dt = parse_datetime("2024-02-28T20:00:00").unwrap();
        let shifted = shift_by_minutes(dt, 330).unwrap();
        assert_eq!(format_datetime(&shifted), "2024-02-29T01:30:00");
    }

    #[test]
    fn test_parse_rejects_leap_second() {
        assert!(parse_datetime("2016-12-31T23:59:60Z").is_err());
        assert!(parse_datetime("2016-12-31T23:59:60").is_err());
        assert!(parse_datetime("2016-12-31T23:59:60.5+00:00").is_err());
        assert!(parse_datetime("2016-12-31 23:59:60").is_err());
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(utc(" 2024-01-01T00:00:00 "), "2024-01-01T00:00:00");
    }

    #[test]
    fn test_shift_rejects_impossible_offset() {
        let dt = parse_datetime("2024-01-01T00:00:00").unwrap();
        assert!(shift_by_minutes(dt, 24 * 60).is_err());
        assert!(shift_by_minutes(dt, i32::MAX).is_err());
    }

    #[test]
    fn test_shift_out_of_range() {
        let max = NaiveDateTime::MAX.and_utc();
        assert!(shift_by_minutes(max, 330).is_err());
    }
}
