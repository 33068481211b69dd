//! Execution units and functional components.
//!
//! The LS8 has a single execution unit: the ALU.

/// Arithmetic Logic Unit for register-to-register operations.
pub mod alu;
