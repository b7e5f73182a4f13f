// Call-site capture happens here: `file!()` and `line!()` expand at the
// user's invocation, even through the nested macros below.

/// Log at an explicit severity.
///
/// ```
/// lvlog::log!(lvlog::Severity::Notice, "{}={}", "x", 5);
///
/// let logger = lvlog::Logger::stdout();
/// lvlog::log!(logger: &logger, lvlog::Severity::Debug, "scoped");
/// ```
///
/// Format arguments are not evaluated when the severity is below the
/// threshold.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = $logger;
        let severity: $crate::Severity = $severity;
        if logger.enabled(severity) {
            logger.log(
                severity,
                $crate::Location::new(file!(), line!()),
                format_args!($($arg)+),
            );
        }
    }};
    ($severity:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::global(), $severity, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! notice {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Notice, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Notice, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warning, $($arg)+)
    };
}

/// Log at `Fatal`. Does not exit the process.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Logger, Severity, Sink};
    use std::cell::Cell;

    #[test]
    fn test_macro_reports_invocation_line() {
        let (sink, buffer) = Sink::memory();
        let logger = Logger::new(sink);

        let expected = line!() + 1;
        crate::notice!(logger: &logger, "{}={}", "x", 5);

        let line = buffer.lines().remove(0);
        assert!(line.starts_with("NOTICE: "));
        assert!(line.ends_with(&format!("macros.rs:{}: x=5", expected)));
    }

    #[test]
    fn test_suppressed_arguments_not_evaluated() {
        let (sink, buffer) = Sink::memory();
        let logger = Logger::new(sink).with_level(Severity::Warning);
        let calls = Cell::new(0);
        let expensive = || {
            calls.set(calls.get() + 1);
            "value"
        };

        crate::debug!(logger: &logger, "{}", expensive());
        crate::warning!(logger: &logger, "{}", expensive());

        assert_eq!(calls.get(), 1);
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_each_severity_macro() {
        let (sink, buffer) = Sink::memory();
        let logger = Logger::new(sink);

        crate::debug!(logger: &logger, "a");
        crate::notice!(logger: &logger, "b");
        crate::warning!(logger: &logger, "c");
        crate::fatal!(logger: &logger, "d");
        crate::log!(logger: &logger, Severity::Notice, "e {}", 1);

        let labels: Vec<String> = buffer
            .lines()
            .iter()
            .map(|l| l.split(':').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(labels, ["DEBUG", "NOTICE", "WARNING", "FATAL", "NOTICE"]);
    }
}
