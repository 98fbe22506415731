//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered from least to most important.
///
/// The discriminants are the conventional numeric levels, rendered by the
/// `%(levelno)s` placeholder.
///
/// Deserializes from anything [`FromStr`] accepts, given as a string or as
/// the bare numeric level, and serializes as the upper-case level name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "RawLevel")]
#[derive(Default)]
pub enum LogLevel {
    Debug = 10,
    Info = 20,
    #[default]
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    /// All levels in ascending order.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    #[inline]
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" | "10" => Ok(LogLevel::Debug),
            "INFO" | "20" => Ok(LogLevel::Info),
            "WARNING" | "WARN" | "30" => Ok(LogLevel::Warning),
            "ERROR" | "40" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" | "50" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Level as it may appear in configuration: a name or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Name(String),
    Number(u64),
}

impl TryFrom<RawLevel> for LogLevel {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, <LogLevel as TryFrom<RawLevel>>::Error> {
        match raw {
            RawLevel::Name(name) => name.parse(),
            RawLevel::Number(n) => n.to_string().parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn test_aliases() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("Fatal".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert_eq!("40".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_numeric_values() {
        let values: Vec<u8> = LogLevel::ALL.iter().map(LogLevel::as_u8).collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_serde_uses_level_names() {
        let json = serde_json::to_string(&LogLevel::Warning).expect("serialize");
        assert_eq!(json, "\"WARNING\"");

        let level: LogLevel = serde_json::from_str("\"CRITICAL\"").expect("deserialize");
        assert_eq!(level, LogLevel::Critical);
    }

    #[test]
    fn test_deserialize_accepts_aliases_and_numbers() {
        let level: LogLevel = serde_json::from_str("\"warn\"").expect("deserialize alias");
        assert_eq!(level, LogLevel::Warning);
        let level: LogLevel = serde_json::from_str("40").expect("deserialize number");
        assert_eq!(level, LogLevel::Error);

        assert!(serde_json::from_str::<LogLevel>("15").is_err());
        assert!(serde_json::from_str::<LogLevel>("\"verbose\"").is_err());
    }

    #[test]
    fn test_default_is_warning() {
        assert_eq!(LogLevel::default(), LogLevel::Warning);
    }
}
