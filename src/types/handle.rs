//! Export cursor handle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle identifying an open export cursor.
///
/// Returned by the entity-report export operations and passed back to
/// `fetch_next` and `close_export`. The mock engine returns whatever handle the
/// test configured; the default handle is `0`.
///
/// ```rust
/// use g2_sdk_mock::ExportHandle;
///
/// let handle = ExportHandle::new(7);
/// assert_eq!(handle.get(), 7);
/// assert_eq!(ExportHandle::default().get(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportHandle(usize);

impl ExportHandle {
    /// Wraps a raw handle value.
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for ExportHandle {
    fn from(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ExportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
