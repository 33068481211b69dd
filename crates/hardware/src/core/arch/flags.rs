//! Condition flags.
//!
//! CMP is the only producer and JEQ/JNE are the only consumers. Until the first
//! compare there are no flags at all, and reading them is a trap rather than a
//! silent `false`.

use std::cmp::Ordering;

use crate::common::error::Trap;

/// Result of the most recent compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flags {
    /// `a == b`.
    pub equal: bool,
    /// `a > b`.
    pub greater: bool,
    /// `a < b`.
    pub less: bool,
}

impl Flags {
    /// Builds the flag set for a comparison outcome. Exactly one flag is set.
    pub const fn from_ordering(ord: Ordering) -> Self {
        Self {
            equal: matches!(ord, Ordering::Equal),
            greater: matches!(ord, Ordering::Greater),
            less: matches!(ord, Ordering::Less),
        }
    }
}

/// Flag register: empty until the first CMP, then holds the last result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlagState {
    last: Option<Flags>,
}

impl FlagState {
    /// No compare has run yet.
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records a compare result, replacing any previous one.
    pub const fn set(&mut self, flags: Flags) {
        self.last = Some(flags);
    }

    /// The last compare result.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::FlagsUnset`] if no CMP has executed.
    pub fn get(&self) -> Result<Flags, Trap> {
        self.last.ok_or(Trap::FlagsUnset)
    }

    /// Whether any CMP has executed.
    pub const fn is_set(&self) -> bool {
        self.last.is_some()
    }

    /// Equal flag.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::FlagsUnset`] if no CMP has executed.
    pub fn equal(&self) -> Result<bool, Trap> {
        self.get().map(|f| f.equal)
    }
}
