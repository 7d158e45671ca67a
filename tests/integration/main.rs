//! Integration tests for the G2 SDK mock clients.
//!
//! Each capability group is driven through its trait object, the way code
//! under test would hold it, with a channel observer collecting
//! notifications and a recording logger collecting trace output.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # Show trace output from the default logger
//! RUST_LOG=g2_sdk_mock=trace cargo test --test integration -- --nocapture
//! ```
//!
//! Notification delivery is asynchronous and unordered, so tests collect the
//! expected number of messages with a timeout and compare them as sets.

mod common;
mod configmgr_tests;
mod engine_tests;
mod product_tests;
