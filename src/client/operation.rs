//! Fixed identifiers of a client operation.

use std::fmt;

/// Compile-time identifiers of one client operation.
///
/// `event_id` is the `messageId` observers receive; `entry_code` and
/// `exit_code` key the trace records. All three are unique within a
/// capability group.
///
/// ```rust
/// use g2_sdk_mock::configmgr::operations;
///
/// assert_eq!(operations::ADD_CONFIG.event_id(), 8001);
/// assert_eq!(operations::ADD_CONFIG.trace_codes(), (1, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    name: &'static str,
    event_id: u32,
    entry_code: u32,
    exit_code: u32,
}

impl Operation {
    /// Declares an operation.
    pub const fn new(name: &'static str, event_id: u32, entry_code: u32, exit_code: u32) -> Self {
        Self { name, event_id, entry_code, exit_code }
    }

    /// Returns the operation name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the notification message id.
    pub const fn event_id(&self) -> u32 {
        self.event_id
    }

    /// Returns the trace-entry code.
    pub const fn entry_code(&self) -> u32 {
        self.entry_code
    }

    /// Returns the trace-exit code.
    pub const fn exit_code(&self) -> u32 {
        self.exit_code
    }

    /// Returns `(entry_code, exit_code)`.
    pub const fn trace_codes(&self) -> (u32, u32) {
        (self.entry_code, self.exit_code)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.event_id)
    }
}
