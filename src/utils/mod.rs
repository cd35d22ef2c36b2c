use std::{io, time::SystemTime};

use chrono::{DateTime, SecondsFormat, Utc};
use colored::{ColoredString, Colorize};

pub fn colorize_file_name(file_name: &str, is_dir: bool) -> ColoredString {
    match (is_dir, file_name.starts_with('.')) {
        (true, true) => file_name.blue().dimmed(),
        (true, false) => file_name.blue(),
        (false, true) => file_name.dimmed(),
        (false, false) => file_name.normal(),
    }
}

/// Renders a filesystem timestamp as RFC 3339 in UTC, or "unavailable"
/// when the platform doesn't record it
pub fn format_time(time: io::Result<SystemTime>) -> String {
    match time {
        Ok(time) => DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(_) => "unavailable".to_string(),
    }
}
