//! Core types shared by every mock client.
//!
//! - [`Context`]: Call context carrying cancellation and an optional deadline
//! - [`ExportHandle`]: Opaque cursor returned by the export operations

mod context;
mod handle;

pub use context::Context;
pub use handle::ExportHandle;
