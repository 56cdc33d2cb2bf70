use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use chip8_isa::{DecodeError, Instruction};

use crate::disassemble;

/// Address at which CHIP-8 interpreters load programs.
pub const DEFAULT_ORIGIN: u16 = 0x200;

/// Listing layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListingConfig {
    /// Address of the first instruction.
    pub origin: u16,

    /// Prefix each line with the instruction address.
    pub show_offsets: bool,

    /// Show the raw opcode word after the address.
    pub show_raw: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            origin: DEFAULT_ORIGIN,
            show_offsets: true,
            show_raw: true,
        }
    }
}

impl ListingConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Render one line per instruction: `ADDR  WORD  TEXT`.
///
/// ```
/// use chip8_disasm::{ListingConfig, disassemble, render};
///
/// let insns = disassemble(&[0x00, 0xE0, 0x6A, 0x07])?;
/// let text = render(&insns, &ListingConfig::default());
/// assert_eq!(text, "0200  00E0  CLS \n0202  6A07  LD V_A, 0x07\n");
/// # Ok::<(), chip8_disasm::DecodeError>(())
/// ```
pub fn render(instructions: &[Instruction], config: &ListingConfig) -> String {
    let mut out = String::new();
    let mut addr = config.origin;
    for insn in instructions {
        if config.show_offsets {
            let _ = write!(out, "{addr:04X}  ");
        }
        if config.show_raw {
            let _ = write!(out, "{:04X}  ", insn.word());
        }
        let _ = writeln!(out, "{insn}");
        addr = addr.wrapping_add(2);
    }
    out
}

/// [`disassemble`] followed by [`render`].
pub fn disassemble_listing(bytes: &[u8], config: &ListingConfig) -> Result<String, DecodeError> {
    Ok(render(&disassemble(bytes)?, config))
}
