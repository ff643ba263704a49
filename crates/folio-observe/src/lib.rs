//! Observability setup for folio: structured logging with an optional
//! OpenTelemetry bridge.

pub mod tracing_setup;
