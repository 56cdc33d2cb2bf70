use chip8_isa::*;

pub fn assert_decodes(bytes: [u8; 2], expected: &str) -> Instruction {
    let insn = decode(&bytes).unwrap();
    assert_eq!(
        insn.to_string(),
        expected,
        "decoding {:02X}{:02X}",
        bytes[0],
        bytes[1]
    );
    assert_eq!(insn.raw(), bytes);
    insn
}

pub fn assert_unknown(bytes: [u8; 2]) {
    let insn = decode(&bytes).unwrap();
    assert_eq!(
        insn.mnemonic(),
        Mnemonic::Unknown { raw: bytes },
        "{:02X}{:02X} should not decode",
        bytes[0],
        bytes[1]
    );
    assert!(insn.operands().is_empty());
}
