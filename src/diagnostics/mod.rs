// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! This is the application's log: user actions, remote operation outcomes,
//! warnings and errors are captured as timestamped events in a
//! memory-bounded circular buffer and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticsCollector`]: Owns the buffer, drains the event channel
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking event sender
//!
//! Access tokens and form values are never logged.

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppOperation, DiagnosticEvent, DiagnosticEventKind, OperationOutcome, UserAction,
};
pub use export::{default_export_directory, write_atomic, ExportError};
