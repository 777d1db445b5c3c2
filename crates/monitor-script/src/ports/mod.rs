//! Ports Layer
//!
//! - Driving Port (inbound): the resource lifecycle API
//! - Driven Port (outbound): the remote Synthetics service

pub mod inbound;
pub mod outbound;

pub use inbound::MonitorScriptApi;
pub use outbound::SyntheticsApi;
