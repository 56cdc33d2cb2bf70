use std::iter::FusedIterator;
use std::slice::ChunksExact;

use chip8_isa::{DecodeError, Instruction, decode};

/// Width of every CHIP-8 instruction in bytes.
const INSTRUCTION_SIZE: usize = 2;

/// Decode a byte slice into instructions, in input order.
///
/// A trailing odd byte is dropped. Invalid opcodes decode to
/// [`Mnemonic::Unknown`](chip8_isa::Mnemonic::Unknown) placeholders so data
/// mixed into the program does not stop disassembly.
///
/// ```
/// let insns = chip8_disasm::disassemble(&[0x00, 0xE0, 0xFF])?;
/// assert_eq!(insns.len(), 1);
/// assert_eq!(insns[0].to_string(), "CLS ");
/// # Ok::<(), chip8_disasm::DecodeError>(())
/// ```
pub fn disassemble(bytes: &[u8]) -> Result<Vec<Instruction>, DecodeError> {
    let decoded = instructions(bytes)
        .map(|r| r.map(|(_, insn)| insn))
        .collect::<Result<Vec<_>, _>>()?;
    log_summary(bytes.len(), &decoded);
    Ok(decoded)
}

/// Same result as [`disassemble`], decoding words on the rayon thread pool.
#[cfg(feature = "rayon")]
pub fn disassemble_par(bytes: &[u8]) -> Result<Vec<Instruction>, DecodeError> {
    use rayon::prelude::*;

    log_trailing(bytes);
    let decoded = bytes
        .par_chunks_exact(INSTRUCTION_SIZE)
        .map(decode)
        .collect::<Result<Vec<_>, _>>()?;
    log_summary(bytes.len(), &decoded);
    Ok(decoded)
}

/// Lazily decode `bytes`, yielding each instruction with its byte offset.
pub fn instructions(bytes: &[u8]) -> Instructions<'_> {
    log_trailing(bytes);
    Instructions {
        chunks: bytes.chunks_exact(INSTRUCTION_SIZE),
        offset: 0,
    }
}

/// Iterator returned by [`instructions`].
#[derive(Clone, Debug)]
pub struct Instructions<'a> {
    chunks: ChunksExact<'a, u8>,
    offset: u32,
}

impl Iterator for Instructions<'_> {
    type Item = Result<(u32, Instruction), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let offset = self.offset;
        self.offset = self.offset.wrapping_add(INSTRUCTION_SIZE as u32);
        Some(decode(chunk).map(|insn| (offset, insn)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Instructions<'_> {}

impl FusedIterator for Instructions<'_> {}

fn log_trailing(bytes: &[u8]) {
    if bytes.len() % INSTRUCTION_SIZE != 0 {
        log::debug!(
            "dropping trailing byte {:#04x} at offset {:#x}",
            bytes[bytes.len() - 1],
            bytes.len() - 1
        );
    }
}

fn log_summary(len: usize, decoded: &[Instruction]) {
    let unknown = decoded.iter().filter(|i| i.is_unknown()).count();
    log::trace!(
        "disassembled {len} bytes: {} instructions, {unknown} unknown",
        decoded.len()
    );
}
