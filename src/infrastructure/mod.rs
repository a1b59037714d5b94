//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `events/` - Resolve event sinks (Console, JSON)

pub mod events;
pub mod fs;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, MemoryFs};
