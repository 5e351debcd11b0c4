//! Event kind trait.

use std::fmt::Debug;
use std::hash::Hash;

/// A closed, compile-time set of notification channels.
///
/// Implemented by a fieldless enum per workflow. The kind is the registry
/// key of a [`Dispatcher`](crate::Dispatcher), so it must be cheap to copy
/// and hashable.
pub trait EventKind: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Stable lower-case name used in logs and notification records.
    fn as_str(&self) -> &'static str;
}
