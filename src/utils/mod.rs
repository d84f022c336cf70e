/// Parsing, shifting and rendering of datetime strings
pub mod datetime;
/// Consistent-format log helpers
pub mod logging;
