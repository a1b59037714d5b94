//! File System Implementations
//!
//! - `LocalFs` - local disk, in-place rewrites
//! - `MemoryFs` - in-memory, for tests

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;
