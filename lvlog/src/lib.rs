//! # lvlog - Process-wide Leveled Logger
//!
//! A single logger gated by a minimum [`Severity`], writing timestamped
//! lines to the console or an append-mode file:
//!
//! ```text
//! NOTICE: 2024-01-02 03:04:05: 1704164645: main.rs:12: x=5
//! ```
//!
//! ## Modules
//!
//! - [`level`] - Severity ordering and labels
//! - [`location`] - Call-site capture
//! - [`format`] - Line rendering
//! - [`sink`] - Output destinations
//! - [`logger`] - The gated logger itself
//! - [`global`] - Process-wide instance and free functions
//! - [`config`] - File-based settings
//! - [`bridge`] - Forwarding of `tracing` events
//! - [`error`] - Typed error handling with thiserror

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod location;
pub mod logger;
pub mod sink;

mod macros;

pub use crate::bridge::{install_tracing_bridge, LvlogLayer};
pub use crate::config::LogConfig;
pub use crate::error::LogError;
pub use crate::global::{
    close, debug, fatal, global, init, notice, open_log, set_log_level, warning,
};
pub use crate::level::Severity;
pub use crate::location::Location;
pub use crate::logger::Logger;
pub use crate::sink::{MemoryBuffer, Sink};
