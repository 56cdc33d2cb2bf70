use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 12-bit memory address, rendered as `a` followed by three hex digits.
///
/// ```
/// use chip8_isa::Addr;
///
/// assert_eq!(Addr::new(0x234).to_string(), "a234");
/// assert_eq!(Addr::new(0xFFFF).value(), 0xFFF);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u16", into = "u16"))]
pub struct Addr(u16);

impl Addr {
    /// Mask `value` to 12 bits.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value & 0x0FFF)
    }

    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{:03X}", self.0)
    }
}

/// 8-bit immediate, rendered as `0x` followed by two hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Imm(u8);

impl Imm {
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Imm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// 4-bit immediate, rendered as `0x` followed by one hex digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Nibble(u8);

impl Nibble {
    /// Mask `value` to 4 bits.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value & 0x0F)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// General purpose register `V0`..`VF`, rendered as `V_` plus one hex digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct Reg(u8);

impl Reg {
    /// Mask `index` to 4 bits.
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index & 0x0F)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V_{:X}", self.0)
    }
}

impl From<u16> for Addr {
    fn from(value: u16) -> Self {
        Addr::new(value)
    }
}

impl From<Addr> for u16 {
    fn from(v: Addr) -> Self {
        v.value()
    }
}

impl From<u8> for Imm {
    fn from(value: u8) -> Self {
        Imm::new(value)
    }
}

impl From<Imm> for u8 {
    fn from(v: Imm) -> Self {
        v.value()
    }
}

impl From<u8> for Nibble {
    fn from(value: u8) -> Self {
        Nibble::new(value)
    }
}

impl From<Nibble> for u8 {
    fn from(v: Nibble) -> Self {
        v.value()
    }
}

impl From<u8> for Reg {
    fn from(value: u8) -> Self {
        Reg::new(value)
    }
}

impl From<Reg> for u8 {
    fn from(v: Reg) -> Self {
        v.index()
    }
}

/// Pseudo-registers and special targets that appear as plain labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Named {
    /// Index register.
    I,
    /// Delay timer.
    Dt,
    /// Sound timer.
    St,
    /// Blocking key wait.
    K,
    /// Small font sprite pointer.
    F,
    /// Large font sprite pointer (SUPER-CHIP).
    Hf,
    /// BCD store at `I`.
    B,
    /// RPL user flags (SUPER-CHIP).
    R,
}

impl Named {
    pub const fn label(self) -> &'static str {
        match self {
            Named::I => "I",
            Named::Dt => "DT",
            Named::St => "ST",
            Named::K => "K",
            Named::F => "F",
            Named::Hf => "HF",
            Named::B => "B",
            Named::R => "R",
        }
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A decoded operand of an [`Instruction`](crate::Instruction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    Addr(Addr),
    Imm(Imm),
    Nibble(Nibble),
    Reg(Reg),
    Named(Named),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Addr(a) => write!(f, "{a}"),
            Operand::Imm(i) => write!(f, "{i}"),
            Operand::Nibble(n) => write!(f, "{n}"),
            Operand::Reg(r) => write!(f, "{r}"),
            Operand::Named(n) => f.write_str(n.label()),
        }
    }
}

impl From<Addr> for Operand {
    fn from(a: Addr) -> Self {
        Operand::Addr(a)
    }
}

impl From<Imm> for Operand {
    fn from(i: Imm) -> Self {
        Operand::Imm(i)
    }
}

impl From<Nibble> for Operand {
    fn from(n: Nibble) -> Self {
        Operand::Nibble(n)
    }
}

impl From<Reg> for Operand {
    fn from(r: Reg) -> Self {
        Operand::Reg(r)
    }
}

impl From<Named> for Operand {
    fn from(n: Named) -> Self {
        Operand::Named(n)
    }
}
