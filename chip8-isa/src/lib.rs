//! CHIP-8 instruction set decoding.
//!
//! This crate turns two-byte CHIP-8 opcodes (including the SUPER-CHIP
//! extensions) into [`Instruction`] values: a [`Mnemonic`] plus typed
//! [`Operand`]s. Decoding is pure; there is no machine state.

mod decoder;
mod instruction;
mod mnemonic;
mod operand;

pub use decoder::{DecodeError, decode, decode_word};
pub use instruction::Instruction;
pub use mnemonic::Mnemonic;
pub use operand::{Addr, Imm, Named, Nibble, Operand, Reg};
