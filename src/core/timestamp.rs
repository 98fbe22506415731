//! Timestamp formatting utilities
//!
//! Renders the `%(asctime)s` field of a log line. The default layout is the
//! conventional `2025-01-08 10:30:45,123`; ISO 8601, RFC 3339 and custom
//! strftime layouts are also supported.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Layout of the `asctime` field
///
/// # Examples
///
/// ```
/// use basic_logging::core::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Default.format(&at), "2025-01-08 10:30:45,000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date, time and milliseconds separated by a comma: `2025-01-08 10:30:45,123`
    ///
    /// Rendered in the timestamp's own time zone (local time for log entries).
    #[default]
    Default,

    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 with the timestamp's offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Custom strftime layout, as given by `datefmt`
    ///
    /// ```
    /// use basic_logging::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// assert!(format.validate().is_ok());
    /// ```
    Custom(String),
}

const DEFAULT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S,%3f";

impl TimestampFormat {
    /// Reject custom layouts chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(layout) = self {
            if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::formatter(
                    "datefmt",
                    format!("invalid strftime layout '{}'", layout),
                ));
            }
        }
        Ok(())
    }

    /// Format a timestamp according to this layout
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Default => render(datetime, DEFAULT_LAYOUT),
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => {
                datetime.to_rfc3339_opts(chrono::SecondsFormat::Millis, false)
            }
            TimestampFormat::Custom(layout) => render(datetime, layout),
        }
    }
}

impl From<Option<String>> for TimestampFormat {
    fn from(datefmt: Option<String>) -> Self {
        datefmt.map_or(TimestampFormat::Default, TimestampFormat::Custom)
    }
}

fn render<Tz>(datetime: &DateTime<Tz>, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::with_capacity(32);
    // Unvalidated layouts fall back to the raw layout instead of panicking.
    if write!(out, "{}", datetime.format(layout)).is_err() {
        out.clear();
        out.push_str(layout);
    }
    out
}
