//! Domain Layer
//!
//! Pure text logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Marker, LineRange)
//! - `services/` - The conflict resolver, marker inspector and range printer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never opens files itself
//! 2. **Pure Functions** - Services are stateless across calls and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
