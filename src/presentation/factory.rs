//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::RegisterUseCase;
use crate::config::{Config, Verbosity};
use crate::domain::ports::{AppBridge, RegisterEventSink};
use crate::infrastructure::{create_bridge, ConsoleEventSink, JsonEventSink, LocalFs};

/// Type alias for the concrete RegisterUseCase with all dependencies
pub type ConcreteRegisterUseCase<E> = RegisterUseCase<LocalFs, Box<dyn AppBridge>, E>;

/// Create a register use case for the configured bridge
pub fn create_register_use_case<E: RegisterEventSink>(
    config: &Config,
    events: E,
) -> ConcreteRegisterUseCase<E> {
    let bridge = create_bridge(
        config.bridge.kind,
        &config.bridge.application,
        config.bridge.program.as_deref(),
    );
    RegisterUseCase::new(LocalFs::new(), bridge, events)
}

/// Pick the stdout event sink for the output mode
pub fn create_event_sink(json: bool, verbosity: Verbosity) -> Box<dyn RegisterEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(verbosity))
    }
}
