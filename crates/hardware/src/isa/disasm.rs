//! Instruction Disassembler for LS8.
//!
//! Converts the instruction at a memory address into a human-readable
//! mnemonic string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! use ls8_core::soc::Memory;
//!
//! let mut mem = Memory::new();
//! mem.load_image(&[0b1000_0010, 0, 8]).unwrap();
//! assert_eq!(disassemble(&mem, 0), "LDI R0, 0x08");
//! ```

use crate::isa::decode::Opcode;
use crate::soc::Memory;

/// Register names for R0–R7. R7 is shown as `SP`.
const REG_NAMES: [&str; 8] = ["R0", "R1", "R2", "R3", "R4", "R5", "R6", "SP"];

/// Returns the name for a register operand.
#[inline]
fn reg(idx: u8) -> String {
    REG_NAMES
        .get(idx as usize)
        .map_or_else(|| format!("R?{idx}"), |name| (*name).to_owned())
}

/// Disassembles the instruction at `addr`.
///
/// Unknown bytes render as `.byte 0xNN`. Operands past the end of memory
/// render as `??`.
pub fn disassemble(mem: &Memory, addr: usize) -> String {
    let Ok(byte) = mem.read(addr) else {
        return String::from("??");
    };
    let Some(op) = Opcode::decode(byte) else {
        return format!(".byte {byte:#04x}");
    };

    let operand = |n: usize| mem.read(addr + n).ok();
    let mn = op.mnemonic();

    match op {
        Opcode::Hlt => mn.to_owned(),
        Opcode::Prn | Opcode::Push | Opcode::Pop | Opcode::Jmp | Opcode::Jeq | Opcode::Jne => {
            match operand(1) {
                Some(r) => format!("{mn} {}", reg(r)),
                None => format!("{mn} ??"),
            }
        }
        Opcode::Ldi => match (operand(1), operand(2)) {
            (Some(r), Some(v)) => format!("{mn} {}, {v:#04x}", reg(r)),
            _ => format!("{mn} ??"),
        },
        Opcode::Mul | Opcode::Cmp | Opcode::St => match (operand(1), operand(2)) {
            (Some(a), Some(b)) => format!("{mn} {}, {}", reg(a), reg(b)),
            _ => format!("{mn} ??"),
        },
    }
}
