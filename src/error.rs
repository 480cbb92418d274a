//! The engine's error taxonomy. The only fallible public entry
//! points are the ones that take caller-supplied tunables; pure
//! computation over already-validated inputs never fails.

use thiserror::Error;

/// An invalid tunable was supplied to [`Config::new`](crate::Config::new).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DiffError {
    /// The similarity threshold must lie in `[0, 1]`.
    #[error("similarity threshold must be in [0, 1], got {0}")]
    InvalidThreshold(f64),
    /// The context window size must be non-negative.
    #[error("context size must be non-negative, got {0}")]
    InvalidContext(i64),
}
