//! # Range Display TZ
//!
//! Renders UTC timestamps from a filter range in the user's display zone.
//!
//! ## Features
//! - Fixed-offset zones (UTC, IST) with no timezone database
//! - Open range sentinels (`-∞`, `∞`, empty) pass through untouched
//! - Unparseable input is echoed back instead of failing
//! - Output is `YYYY-MM-DDTHH:mm:ss` regardless of the host timezone

/// Formatter configuration (preferred display zone)
pub mod config;
/// Timezone identifiers and the display formatter
pub mod services;
/// Utility functions for datetime parsing and logging
pub mod utils;

pub use config::FormatterConfig;
pub use services::timezone::{
    format, format_with_zone_name, FilterRange, TimezoneFormatter, TimezoneIdentifier,
};
