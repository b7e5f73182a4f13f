use crate::level::Severity;
use crate::location::Location;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Write};

/// Wall-clock layout of the second header field.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render one complete log line, trailing newline included:
///
/// `<LEVEL>: <YYYY-MM-DD HH:MM:SS>: <unix-seconds>: <basename>:<line>: <message>`
pub fn format_line<Tz>(
    severity: Severity,
    now: &DateTime<Tz>,
    location: Location,
    args: fmt::Arguments<'_>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut line = String::with_capacity(96);
    // Writing into a String cannot fail.
    let _ = writeln!(
        line,
        "{}: {}: {}: {}:{}: {}",
        severity.label(),
        now.format(TIME_FORMAT),
        now.timestamp(),
        location.basename(),
        location.line(),
        args
    );
    line
}

/// Render a line stamped with the current local time.
pub fn format_now(severity: Severity, location: Location, args: fmt::Arguments<'_>) -> String {
    format_line(severity, &Local::now(), location, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_exact_layout() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let line = format_line(
            Severity::Notice,
            &now,
            Location::new("src/bin/server.rs", 42),
            format_args!("{}={}", "x", 5),
        );

        assert_eq!(
            line,
            "NOTICE: 2024-01-02 03:04:05: 1704164645: server.rs:42: x=5\n"
        );
    }

    #[test]
    fn test_epoch_ignores_timezone() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2024, 1, 2, 11, 4, 5).unwrap();
        let line = format_line(
            Severity::Fatal,
            &now,
            Location::unknown(),
            format_args!("boom"),
        );

        assert_eq!(line, "FATAL: 2024-01-02 11:04:05: 1704164645: unknown:0: boom\n");
    }

    #[test]
    fn test_single_trailing_newline() {
        let line = format_now(Severity::Debug, Location::caller(), format_args!("hello"));
        assert!(line.starts_with("DEBUG: "));
        assert!(line.ends_with(": hello\n"));
        assert_eq!(line.matches('\n').count(), 1);
    }
}
