//! ALU arithmetic operations.
//!
//! Registers are 8 bits wide; results wrap modulo 256.

use super::AluOp;

/// Executes an arithmetic operation. Returns `0` for non-arithmetic ops.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Cmp => 0,
    }
}
