//! Resolve Use Case
//!
//! Orchestrates conflict resolution across a list of files.
//!
//! This module handles:
//! - Reading each file and resolving its conflict blocks
//! - Rewriting the file in place
//! - Optionally reporting leftover marker lines afterwards

mod options;
mod result;
mod use_case;

pub use options::ResolveOptions;
pub use result::{InspectedFile, ResolveResult, ResolvedFile};
pub use use_case::ResolveUseCase;
