/// Fixed-offset display zones and the formatter built on them
pub mod timezone;
