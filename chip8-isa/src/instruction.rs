use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Mnemonic, Operand};

/// A single decoded instruction.
///
/// Displays as the mnemonic, a space, then the comma separated operands.
/// The space is written even when there are no operands:
///
/// ```
/// let insn = chip8_isa::decode(&[0x6A, 0x07])?;
/// assert_eq!(insn.to_string(), "LD V_A, 0x07");
/// assert_eq!(chip8_isa::decode(&[0x00, 0xE0])?.to_string(), "CLS ");
/// # Ok::<(), chip8_isa::DecodeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstruction"))]
pub struct Instruction {
    mnemonic: Mnemonic,
    operands: Vec<Operand>,
    raw: [u8; 2],
}

impl Instruction {
    pub(crate) fn new(mnemonic: Mnemonic, operands: Vec<Operand>, raw: [u8; 2]) -> Self {
        Self {
            mnemonic,
            operands,
            raw,
        }
    }

    /// Placeholder for a bit pattern that is not a valid opcode.
    pub(crate) fn unknown(raw: [u8; 2]) -> Self {
        Self::new(Mnemonic::Unknown { raw }, Vec::new(), raw)
    }

    #[inline]
    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    #[inline]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// The two bytes this instruction was decoded from.
    #[inline]
    pub fn raw(&self) -> [u8; 2] {
        self.raw
    }

    /// Big-endian opcode word, e.g. `0x00E0` for `CLS`.
    #[inline]
    pub fn word(&self) -> u16 {
        u16::from_be_bytes(self.raw)
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.mnemonic.is_unknown()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.mnemonic)?;
        for (i, op) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Deserialized form of an [`Instruction`]. Only the raw bytes are trusted;
/// mnemonic and operands are decoded again from them.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawInstruction {
    raw: [u8; 2],
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstruction> for Instruction {
    type Error = crate::DecodeError;

    fn try_from(value: RawInstruction) -> Result<Self, Self::Error> {
        crate::decode(&value.raw)
    }
}
