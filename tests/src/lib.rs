//! # Monitor Script Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Signing and assembly throughput
//! └── src/integration/  # End-to-end lifecycle through the public API
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p monitor-script-tests
//! cargo bench -p monitor-script-tests
//! ```

pub mod integration;
