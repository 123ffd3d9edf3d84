//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Choosing the output format (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use xcadd::presentation::factory;
//!
//! let sink = factory::create_event_sink(false, config.output.verbosity);
//! let use_case = factory::create_register_use_case(&config, sink);
//! let report = use_case.execute(&options)?;
//! ```

pub mod factory;

pub use factory::{create_event_sink, create_register_use_case, ConcreteRegisterUseCase};
