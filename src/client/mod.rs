//! Shared machinery behind the mock clients.
//!
//! Every mock operation runs the same four steps, always in this order:
//!
//! 1. **Enter**: emit the trace-entry record (only when tracing).
//! 2. **Notify**: launch a detached notification (only when observers are registered).
//! 3. **Compute**: read the canned result.
//! 4. **Exit**: emit the trace-exit record with results and elapsed time (only when tracing).
//!
//! Each operation is described by an [`Operation`]: its name, the message id
//! used in notifications, and its pair of trace codes.

mod inner;
mod operation;

pub use operation::Operation;
#[cfg(test)]
pub(crate) use operation::tests::assert_unique;

pub(crate) use inner::{ClientInner, Details, details};
