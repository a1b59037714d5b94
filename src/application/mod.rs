//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain the text rules themselves (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Resolve conflicts in place, then optionally inspect
//! - `PrintLinesUseCase` - Print a numbered line range

pub mod print_lines;
pub mod resolve;

pub use print_lines::{PrintLinesOptions, PrintLinesUseCase};
pub use resolve::{ResolveOptions, ResolveResult, ResolveUseCase};
