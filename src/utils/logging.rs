use tracing::{debug, info, warn};

/// Logs a pass-through caused by input that could not be formatted
pub fn log_format_fallback(input: &str, zone: &str, error: &str) {
    debug!(
        "FORMAT_FALLBACK: '{}' left unchanged for zone {} - {}",
        input, zone, error
    );
}

/// Logs a zone name that does not map to a known fixed offset
pub fn log_unknown_zone(zone_name: &str, details: Option<&str>) {
    match details {
        Some(d) => warn!("ZONE_UNKNOWN: '{}' - {}", zone_name, d),
        None => warn!("ZONE_UNKNOWN: '{}'", zone_name),
    }
}

/// Logs configuration events with consistent format
pub fn log_config_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("CONFIG: {} - {}", event, d),
        None => info!("CONFIG: {}", event),
    }
}
