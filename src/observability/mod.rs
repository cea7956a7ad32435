//! Logging for the employee service
//!
//! Request and record lifecycle events are emitted with `tracing`; this
//! module only wires up the subscriber.

pub mod logging;

pub use logging::init_logging;
