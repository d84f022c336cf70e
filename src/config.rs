use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::services::timezone::TimezoneIdentifier;
use crate::utils::logging::log_config_event;

/// Display preferences for a [`TimezoneFormatter`](crate::TimezoneFormatter)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Zone used when the caller does not name one
    pub default_zone: TimezoneIdentifier,
}

impl FormatterConfig {
    /// Config with an explicit default zone
    pub fn new(default_zone: TimezoneIdentifier) -> Self {
        Self { default_zone }
    }

    /// Builds a config from a user-supplied zone name. A blank name means UTC.
    pub fn from_zone_name(name: &str) -> Result<Self> {
        let name = name.trim();

        if name.is_empty() {
            log_config_event("Display timezone not set", Some("using UTC"));
            return Ok(Self::default());
        }

        let default_zone = name
            .parse::<TimezoneIdentifier>()
            .map_err(|_| anyhow!("Invalid display timezone: {}", name))?;

        log_config_event("Display timezone selected", Some(default_zone.as_str()));
        Ok(Self { default_zone })
    }
}
