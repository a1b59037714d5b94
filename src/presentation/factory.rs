//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for both binaries.

use crate::application::{PrintLinesUseCase, ResolveUseCase};
use crate::domain::ports::ResolveEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};

/// Type alias for the concrete ResolveUseCase
pub type ConcreteResolveUseCase = ResolveUseCase<LocalFs>;

/// Type alias for the concrete PrintLinesUseCase
pub type ConcretePrintLinesUseCase = PrintLinesUseCase<LocalFs>;

/// Create a resolve use case backed by the local disk
pub fn create_resolve_use_case() -> ConcreteResolveUseCase {
    ResolveUseCase::new(LocalFs::new())
}

/// Create a print-lines use case backed by the local disk
pub fn create_print_lines_use_case() -> ConcretePrintLinesUseCase {
    PrintLinesUseCase::new(LocalFs::new())
}

/// Pick the event sink for the requested output format
pub fn create_event_sink(json: bool) -> Box<dyn ResolveEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout())
    }
}
