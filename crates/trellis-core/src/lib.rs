//! Core systems for Trellis.
//!
//! This crate provides the foundations the Trellis widget controllers are
//! built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Errors**: The core error type and `Result` alias
//! - **Logging**: `tracing` targets, span names and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Error, Result, SignalError};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
