//! # Integration Flows
//!
//! Lifecycle scenarios driven through `MonitorScriptApi` against the
//! in-memory Synthetics service and a flaky test double.

pub mod lifecycle;
pub mod properties;
