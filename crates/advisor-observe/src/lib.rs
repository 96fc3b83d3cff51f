//! Observability setup for the Ogun Startup Advisor: structured logging and
//! optional OpenTelemetry export.

pub mod tracing_setup;
