//! Runtime access errors.

use std::any::type_name;

/// Error returned by typed access to an alternative that is not active.
///
/// A bad access is a caller logic error: the caller assumed the wrong
/// alternative. Check with `holds_alternative` first when absence is an
/// expected outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The requested alternative is not the active one.
    BadAccess {
        /// Tag of the requested alternative.
        requested: usize,
        /// Tag of the active alternative.
        active: usize,
        /// Type name of the requested alternative.
        alternative: &'static str,
    },
}

impl AccessError {
    pub(crate) fn bad_access<T>(requested: usize, active: usize) -> Self {
        AccessError::BadAccess {
            requested,
            active,
            alternative: type_name::<T>(),
        }
    }

    /// Tag the caller asked for.
    pub fn requested(&self) -> usize {
        match self {
            AccessError::BadAccess { requested, .. } => *requested,
        }
    }

    /// Tag that was active at the time of the access.
    pub fn active(&self) -> usize {
        match self {
            AccessError::BadAccess { active, .. } => *active,
        }
    }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessError::BadAccess {
                requested,
                active,
                alternative,
            } => write!(
                f,
                "bad variant access: requested `{alternative}` (alternative {requested}) \
                 but alternative {active} is active"
            ),
        }
    }
}

impl std::error::Error for AccessError {}
