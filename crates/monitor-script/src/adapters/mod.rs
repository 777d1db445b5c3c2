//! Adapters Layer
//!
//! Implementations of the `SyntheticsApi` driven port.

pub mod memory;
#[cfg(feature = "rest")]
pub mod rest;

pub use memory::InMemorySyntheticsApi;
#[cfg(feature = "rest")]
pub use rest::RestSyntheticsApi;
