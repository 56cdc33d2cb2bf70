use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operation name of a decoded instruction.
///
/// SUPER-CHIP extension opcodes render with a trailing `*`. Bit patterns the
/// decoder does not recognise become [`Mnemonic::Unknown`], which keeps the
/// original bytes and is only turned into text on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mnemonic {
    Cls,
    Ret,
    /// `0nnn` machine code routine; legal but not decoded further.
    SysIgnored,
    Jmp,
    Call,
    Se,
    Sne,
    Ld,
    Add,
    Or,
    And,
    Xor,
    Sub,
    Shr,
    Subn,
    Shl,
    Jp,
    Rnd,
    Drw,
    Skp,
    Sknp,
    // SUPER-CHIP
    Scd,
    Scr,
    Scl,
    Exit,
    Low,
    High,
    LdExt,
    Unknown { raw: [u8; 2] },
}

impl Mnemonic {
    /// Static text for every known mnemonic, `None` for [`Mnemonic::Unknown`].
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Mnemonic::Cls => "CLS",
            Mnemonic::Ret => "RET",
            Mnemonic::SysIgnored => "IGNORE SYS CALL",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Call => "CALL",
            Mnemonic::Se => "SE",
            Mnemonic::Sne => "SNE",
            Mnemonic::Ld => "LD",
            Mnemonic::Add => "ADD",
            Mnemonic::Or => "OR",
            Mnemonic::And => "AND",
            Mnemonic::Xor => "XOR",
            Mnemonic::Sub => "SUB",
            Mnemonic::Shr => "SHR",
            Mnemonic::Subn => "SUBN",
            Mnemonic::Shl => "SHL",
            Mnemonic::Jp => "JP",
            Mnemonic::Rnd => "RND",
            Mnemonic::Drw => "DRW",
            Mnemonic::Skp => "SKP",
            Mnemonic::Sknp => "SKNP",
            Mnemonic::Scd => "SCD*",
            Mnemonic::Scr => "SCR*",
            Mnemonic::Scl => "SCL*",
            Mnemonic::Exit => "EXIT*",
            Mnemonic::Low => "LOW*",
            Mnemonic::High => "HIGH*",
            Mnemonic::LdExt => "LD*",
            Mnemonic::Unknown { .. } => return None,
        })
    }

    /// True for SUPER-CHIP only opcodes.
    pub const fn is_extension(self) -> bool {
        matches!(
            self,
            Mnemonic::Scd
                | Mnemonic::Scr
                | Mnemonic::Scl
                | Mnemonic::Exit
                | Mnemonic::Low
                | Mnemonic::High
                | Mnemonic::LdExt
        )
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Mnemonic::Unknown { .. })
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Mnemonic::Unknown { raw: [hi, lo] } => write!(f, "???0x{hi:02X}{lo:02X}???"),
            known => f.write_str(known.name().unwrap_or_default()),
        }
    }
}
