//! A small `ahash`/`hashbrown`-backed interner, used wherever equality-heavy
//! sequence comparisons dominate runtime (line-level diffing in
//! [`crate::patience`]).
//!
//! Only ever interns `&str` lines for the patience engine, so there's no
//! need for a public `TokenSource`/`InternedInput` pair for building token
//! sequences from arbitrary user types; just the id/table core.

use ahash::RandomState;
use hashbrown::raw::RawTable;
use std::hash::Hash;
use std::ops::Index;

/// An interned id standing in for some `T` during a diff computation.
///
/// Comparing two `Id`s is a single integer comparison regardless of how
/// expensive comparing the underlying `T` would have been.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[repr(transparent)]
pub(crate) struct Id(pub u32);

/// A hashtable-based interner mapping distinct `T` values to small integer
/// [`Id`]s.
pub(crate) struct Interner<T: Hash + Eq> {
    tokens: Vec<T>,
    table: RawTable<Id>,
    hasher: RandomState,
}

impl<T: Hash + Eq> Interner<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Interner {
            tokens: Vec::with_capacity(capacity),
            table: RawTable::with_capacity(capacity),
            hasher: RandomState::new(),
        }
    }

    pub(crate) fn intern(&mut self, token: T) -> Id {
        let hash = self.hasher.hash_one(&token);
        if let Some(&id) = self
            .table
            .get(hash, |&it| self.tokens[it.0 as usize] == token)
        {
            id
        } else {
            let interned = Id(self.tokens.len() as u32);
            self.table.insert(hash, interned, |&id| {
                self.hasher.hash_one(&self.tokens[id.0 as usize])
            });
            self.tokens.push(token);
            interned
        }
    }
}

impl<T: Hash + Eq> Index<Id> for Interner<T> {
    type Output = T;
    fn index(&self, index: Id) -> &Self::Output {
        &self.tokens[index.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_values_share_an_id() {
        let mut interner = Interner::new(0);
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        let c = interner.intern("foo");
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(interner[a], "foo");
        assert_eq!(interner[b], "bar");
    }
}
