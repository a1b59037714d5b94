//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Logging setup and error rendering
//!
//! ## Structure
//!
//! - `cli` - Argument structs for `print-lines` and `resolve-conflicts`
//! - `factory` - Creates use cases with proper dependencies
//! - `logging` - `tracing` subscriber setup
//! - `error` - User-facing error output

pub mod cli;
pub mod error;
pub mod factory;
pub mod logging;

pub use factory::{create_event_sink, create_print_lines_use_case, create_resolve_use_case};
