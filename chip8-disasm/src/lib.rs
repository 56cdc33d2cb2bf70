//! Disassembly of CHIP-8 byte streams.
//!
//! [`disassemble`] splits a program image into two-byte words and decodes
//! each with [`chip8_isa::decode`]. [`render`] turns the result into a
//! printable listing.

mod listing;
mod stream;

pub use listing::{DEFAULT_ORIGIN, ListingConfig, disassemble_listing, render};
pub use stream::{Instructions, disassemble, instructions};

#[cfg(feature = "rayon")]
pub use stream::disassemble_par;

pub use chip8_isa::{DecodeError, Instruction};
