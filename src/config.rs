//! The tunables threading through the engine, grouped into one small
//! `Config` type with a `Default` impl rather than passing three or four
//! bare scalars to every call.

use crate::error::DiffError;

/// Similarity threshold and context window controlling [`diff_hunks`](crate::diff_hunks), plus an
/// optional Myers search cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Minimum character-based similarity for a deleted/inserted
    /// line pair to be rendered as one refined `Replace` line.
    pub threshold: f64,
    /// Number of unchanged lines retained around a changed region.
    pub context: u32,
    /// Upper bound on Myers search rounds (`D`). `None` means no cap: the
    /// exact script is always found.
    pub max_d: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threshold: 0.5,
            context: 3,
            max_d: None,
        }
    }
}

impl Config {
    /// Builds a `Config` from a similarity threshold and a context size,
    /// validating both against the crate's invalid-input taxonomy.
    pub fn new(threshold: f64, context: i64) -> Result<Self, DiffError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(DiffError::InvalidThreshold(threshold));
        }
        if context < 0 {
            return Err(DiffError::InvalidContext(context));
        }
        Ok(Config {
            threshold,
            context: context as u32,
            max_d: None,
        })
    }

    /// Caps the Myers search at `max_d` rounds; computations that would
    /// need more return a valid but possibly non-minimal script with
    /// [`Diff::approximate`](crate::Diff::approximate) set.
    pub fn with_max_d(mut self, max_d: usize) -> Self {
        self.max_d = Some(max_d);
        self
    }
}
