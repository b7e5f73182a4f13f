use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered `Debug < Notice < Warning < Fatal`.
///
/// `Fatal` is only the highest filter level. Logging at it never aborts
/// the process.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    #[default]
    Debug = 0,
    Notice = 1,
    Warning = 2,
    Fatal = 3,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Notice,
        Severity::Warning,
        Severity::Fatal,
    ];

    /// Label written at the start of every line.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Fatal => "FATAL",
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Debug,
            1 => Severity::Notice,
            2 => Severity::Warning,
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "notice" => Ok(Severity::Notice),
            "warning" | "warn" => Ok(Severity::Warning),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(LogError::InvalidLevel {
                value: s.to_string(),
            }),
        }
    }
}
