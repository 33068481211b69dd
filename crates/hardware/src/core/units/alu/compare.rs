//! ALU comparison.

use crate::core::arch::flags::Flags;

/// Compares `a` against `b` as unsigned bytes.
pub fn execute(a: u8, b: u8) -> Flags {
    Flags::from_ordering(a.cmp(&b))
}
