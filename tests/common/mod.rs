//! Common test utilities for the textfix CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus helpers to run both binaries
//! - Assertion macros: `assert_file_eq!`, `assert_output_contains!`
//! - Fixtures: Reusable file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
