//! # Tracing Bridge
//!
//! Routes `tracing` events from third-party crates into a [`Logger`] so
//! their output lands in the same sink with the same line layout.

use crate::error::LogError;
use crate::level::Severity;
use crate::location::Location;
use crate::logger::Logger;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Layer;

/// `tracing_subscriber` layer forwarding every event to a [`Logger`].
pub struct LvlogLayer {
    logger: &'static Logger,
}

impl LvlogLayer {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

/// Severity a tracing level is logged at.
pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Fatal,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Notice,
        _ => Severity::Debug,
    }
}

struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

impl<S> Layer<S> for LvlogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = severity_for(metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let location = match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => Location::new(file, line),
            _ => Location::unknown(),
        };

        let mut visitor = MessageVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        self.logger
            .log(severity, location, format_args!("{}", visitor.message));
    }
}

/// Install the bridge, targeting the process-wide logger, as the global
/// tracing subscriber.
pub fn install_tracing_bridge() -> Result<(), LogError> {
    let subscriber = tracing_subscriber::registry().with(LvlogLayer::new(crate::global()));

    tracing::subscriber::set_global_default(subscriber).map_err(|e| LogError::Subscriber {
        reason: e.to_string(),
    })
}
