//! Configuration types for the mock clients.
//!
//! - [`ClientConfig`]: Initial log level, subject id and SDK id of a client

mod client;

pub use client::{ClientConfig, DEFAULT_SDK_ID};
