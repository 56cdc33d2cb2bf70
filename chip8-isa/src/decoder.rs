use crate::{Addr, Imm, Instruction, Mnemonic, Named, Nibble, Operand, Reg};

/// Errors from [`decode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Every CHIP-8 instruction is exactly two bytes.
    #[error("invalid instruction length {0}: all CHIP-8 instructions are 2 bytes")]
    InvalidLength(usize),
    /// Leading nibble fell outside `0x0..=0xF`. Not reachable from a `u8`.
    #[error("invalid leading opcode byte {0:#04x}")]
    InvalidOpcode(u8),
}

/// Decode exactly one two-byte instruction.
///
/// Malformed opcodes are not an error: they decode to an instruction whose
/// mnemonic is [`Mnemonic::Unknown`]. Only a slice of the wrong length fails.
///
/// ```
/// use chip8_isa::{decode, DecodeError, Mnemonic};
///
/// let insn = decode(&[0x12, 0x34])?;
/// assert_eq!(insn.mnemonic(), Mnemonic::Jmp);
/// assert_eq!(insn.to_string(), "JMP a234");
///
/// assert_eq!(decode(&[0xFF]), Err(DecodeError::InvalidLength(1)));
/// # Ok::<(), DecodeError>(())
/// ```
pub fn decode(bytes: &[u8]) -> Result<Instruction, DecodeError> {
    let &[b0, b1] = bytes else {
        return Err(DecodeError::InvalidLength(bytes.len()));
    };
    dispatch([b0, b1])
}

/// Decode a big-endian opcode word, e.g. `0x00E0`.
pub fn decode_word(word: u16) -> Result<Instruction, DecodeError> {
    dispatch(word.to_be_bytes())
}

/// Bit fields of an opcode `_xyn` / `_xkk` / `_nnn`.
#[derive(Clone, Copy)]
struct Fields([u8; 2]);

impl Fields {
    fn x(self) -> Reg {
        Reg::new(self.0[0] & 0x0F)
    }

    fn y(self) -> Reg {
        Reg::new(self.0[1] >> 4)
    }

    fn n(self) -> u8 {
        self.0[1] & 0x0F
    }

    fn kk(self) -> Imm {
        Imm::new(self.0[1])
    }

    fn nnn(self) -> Addr {
        Addr::new(((self.0[0] as u16 & 0x0F) << 8) | self.0[1] as u16)
    }
}

fn dispatch(raw: [u8; 2]) -> Result<Instruction, DecodeError> {
    let f = Fields(raw);
    let insn = |mnemonic, operands: Vec<Operand>| Instruction::new(mnemonic, operands, raw);

    let decoded = match raw[0] & 0xF0 {
        0x00 => decode_0(raw),
        0x10 => insn(Mnemonic::Jmp, vec![f.nnn().into()]),
        0x20 => insn(Mnemonic::Call, vec![f.nnn().into()]),
        0x30 => insn(Mnemonic::Se, vec![f.x().into(), f.kk().into()]),
        0x40 => insn(Mnemonic::Sne, vec![f.x().into(), f.kk().into()]),
        // 5xy0 and 9xy0 must end in a zero nibble.
        0x50 if f.n() != 0 => unknown(raw),
        0x50 => insn(Mnemonic::Se, vec![f.x().into(), f.y().into()]),
        0x60 => insn(Mnemonic::Ld, vec![f.x().into(), f.kk().into()]),
        0x70 => insn(Mnemonic::Add, vec![f.x().into(), f.kk().into()]),
        0x80 => decode_8(raw),
        0x90 if f.n() != 0 => unknown(raw),
        0x90 => insn(Mnemonic::Sne, vec![f.x().into(), f.y().into()]),
        0xA0 => insn(Mnemonic::Ld, vec![Named::I.into(), f.nnn().into()]),
        0xB0 => insn(Mnemonic::Jp, vec![Reg::new(0).into(), f.nnn().into()]),
        0xC0 => insn(Mnemonic::Rnd, vec![f.x().into(), f.kk().into()]),
        0xD0 => insn(
            Mnemonic::Drw,
            vec![f.x().into(), f.y().into(), Nibble::new(f.n()).into()],
        ),
        0xE0 => decode_e(raw),
        0xF0 => decode_f(raw),
        _ => return Err(DecodeError::InvalidOpcode(raw[0])),
    };
    Ok(decoded)
}

fn unknown(raw: [u8; 2]) -> Instruction {
    log::debug!("unknown opcode {:#06x}", u16::from_be_bytes(raw));
    Instruction::unknown(raw)
}

/// `0___`: screen and flow control, plus ignored machine code calls.
fn decode_0(raw: [u8; 2]) -> Instruction {
    if raw[0] != 0x00 {
        return Instruction::new(Mnemonic::SysIgnored, Vec::new(), raw);
    }
    let mnemonic = match raw[1] {
        0xE0 => Mnemonic::Cls,
        0xEE => Mnemonic::Ret,
        0xFB => Mnemonic::Scr,
        0xFC => Mnemonic::Scl,
        0xFD => Mnemonic::Exit,
        0xFE => Mnemonic::Low,
        0xFF => Mnemonic::High,
        // 00Cn scroll-down count is not surfaced as an operand.
        0xC0..=0xCF => Mnemonic::Scd,
        _ => return unknown(raw),
    };
    Instruction::new(mnemonic, Vec::new(), raw)
}

/// `8xyN`: register to register ALU ops, selected by the low nibble.
fn decode_8(raw: [u8; 2]) -> Instruction {
    let f = Fields(raw);
    let mnemonic = match f.n() {
        0x0 => Mnemonic::Ld,
        0x1 => Mnemonic::Or,
        0x2 => Mnemonic::And,
        0x3 => Mnemonic::Xor,
        0x4 => Mnemonic::Add,
        0x5 => Mnemonic::Sub,
        0x6 => Mnemonic::Shr,
        0x7 => Mnemonic::Subn,
        0xE => Mnemonic::Shl,
        _ => return unknown(raw),
    };
    Instruction::new(mnemonic, vec![f.x().into(), f.y().into()], raw)
}

/// `ExNN`: key skips.
fn decode_e(raw: [u8; 2]) -> Instruction {
    let x: Operand = Fields(raw).x().into();
    match raw[1] {
        0x9E => Instruction::new(Mnemonic::Skp, vec![x], raw),
        0xA1 => Instruction::new(Mnemonic::Sknp, vec![x], raw),
        _ => unknown(raw),
    }
}

/// `FxNN`: timers, memory and font loads.
fn decode_f(raw: [u8; 2]) -> Instruction {
    let x: Operand = Fields(raw).x().into();
    let (mnemonic, operands) = match raw[1] {
        0x07 => (Mnemonic::Ld, [x, Named::Dt.into()]),
        0x0A => (Mnemonic::Ld, [x, Named::K.into()]),
        0x15 => (Mnemonic::Ld, [Named::Dt.into(), x]),
        0x18 => (Mnemonic::Ld, [Named::St.into(), x]),
        0x1E => (Mnemonic::Add, [Named::I.into(), x]),
        0x29 => (Mnemonic::Ld, [Named::F.into(), x]),
        0x30 => (Mnemonic::LdExt, [Named::Hf.into(), x]),
        0x33 => (Mnemonic::Ld, [Named::B.into(), x]),
        0x55 => (Mnemonic::Ld, [Named::I.into(), x]),
        0x65 => (Mnemonic::Ld, [x, Named::I.into()]),
        0x75 => (Mnemonic::LdExt, [Named::R.into(), x]),
        0x85 => (Mnemonic::LdExt, [x, Named::R.into()]),
        _ => return unknown(raw),
    };
    Instruction::new(mnemonic, operands.to_vec(), raw)
}
