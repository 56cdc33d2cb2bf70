//! Exhaustive checks over all 65536 opcode words.

use chip8_isa::*;

fn all_words() -> impl Iterator<Item = [u8; 2]> {
    (0..=u16::MAX).map(u16::to_be_bytes)
}

#[test]
fn every_pair_decodes() {
    for bytes in all_words() {
        let insn = decode(&bytes);
        assert!(insn.is_ok(), "{bytes:02X?} failed: {insn:?}");
    }
}

#[test]
fn raw_bytes_are_preserved() {
    for bytes in all_words() {
        assert_eq!(decode(&bytes).unwrap().raw(), bytes);
    }
}

#[test]
fn decoding_is_idempotent() {
    for bytes in all_words() {
        assert_eq!(decode(&bytes).unwrap(), decode(&bytes).unwrap());
    }
}

#[test]
fn unknown_opcodes_have_no_operands() {
    for bytes in all_words() {
        let insn = decode(&bytes).unwrap();
        if insn.is_unknown() {
            assert!(insn.operands().is_empty(), "{insn}");
            assert_eq!(insn.mnemonic(), Mnemonic::Unknown { raw: bytes });
        }
    }
}

#[test]
fn arity_is_at_most_three() {
    for bytes in all_words() {
        let insn = decode(&bytes).unwrap();
        assert!(insn.operands().len() <= 3, "{insn}");
    }
}

#[test]
fn operand_values_come_from_the_opcode() {
    for bytes in all_words() {
        let insn = decode(&bytes).unwrap();
        let nnn = u16::from_be_bytes(bytes) & 0x0FFF;
        for op in insn.operands() {
            match *op {
                Operand::Addr(a) => assert_eq!(a.value(), nnn),
                Operand::Imm(i) => assert_eq!(i.value(), bytes[1]),
                Operand::Nibble(n) => assert_eq!(n.value(), bytes[1] & 0x0F),
                Operand::Reg(r) => assert!(
                    r.index() == bytes[0] & 0x0F || r.index() == bytes[1] >> 4 || r.index() == 0,
                    "{insn}"
                ),
                Operand::Named(_) => {}
            }
        }
    }
}

#[test]
fn known_mnemonics_have_uppercase_names() {
    for bytes in all_words() {
        let m = decode(&bytes).unwrap().mnemonic();
        let Some(name) = m.name() else { continue };
        assert!(
            name.bytes()
                .all(|b| b.is_ascii_uppercase() || b == b' ' || b == b'*'),
            "mnemonic '{name}' contains unexpected characters"
        );
        assert_eq!(m.is_extension(), name.ends_with('*'));
    }
}

#[test]
fn unknown_count_per_family() {
    let count = |hi: u8| {
        (0..=u8::MAX)
            .filter(|&lo| decode(&[hi, lo]).unwrap().is_unknown())
            .count()
    };
    // 5xy0 / 9xy0: 15 of 16 low nibbles rejected.
    assert_eq!(count(0x51), 240);
    assert_eq!(count(0x91), 240);
    // 8xyN: 7 unused low nibbles.
    assert_eq!(count(0x81), 7 * 16);
    assert_eq!(count(0xE1), 254);
    assert_eq!(count(0xF1), 256 - 12);
    // 00__: CLS, RET, 5 SUPER-CHIP screen ops and 16 SCD.
    assert_eq!(count(0x00), 256 - 23);
    assert_eq!(count(0x01), 0);
    assert_eq!(count(0x1F), 0);
}
