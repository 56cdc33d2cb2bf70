use chip8_isa::*;

#[test]
fn address_is_three_uppercase_digits() {
    assert_eq!(Addr::new(0x0).to_string(), "a000");
    assert_eq!(Addr::new(0x00A).to_string(), "a00A");
    assert_eq!(Addr::new(0xABC).to_string(), "aABC");
}

#[test]
fn address_is_masked_to_twelve_bits() {
    assert_eq!(Addr::new(0xF123).value(), 0x123);
}

#[test]
fn immediate_is_two_uppercase_digits() {
    assert_eq!(Imm::new(0x0).to_string(), "0x00");
    assert_eq!(Imm::new(0x7).to_string(), "0x07");
    assert_eq!(Imm::new(0xAB).to_string(), "0xAB");
}

#[test]
fn nibble_is_one_uppercase_digit() {
    assert_eq!(Nibble::new(0x0).to_string(), "0x0");
    assert_eq!(Nibble::new(0xF).to_string(), "0xF");
    assert_eq!(Nibble::new(0x1C).value(), 0xC);
}

#[test]
fn register_label() {
    assert_eq!(Reg::new(0xA).to_string(), "V_A");
    assert_ne!(Reg::new(0xA).to_string(), "v_a");
    assert_ne!(Reg::new(0xA).to_string(), "V_0A");
    assert_eq!(Reg::new(0x0).to_string(), "V_0");
    assert_eq!(Reg::new(0x1F).index(), 0xF);
}

#[test]
fn named_labels() {
    let labels: Vec<String> = [
        Named::I,
        Named::Dt,
        Named::St,
        Named::K,
        Named::F,
        Named::Hf,
        Named::B,
        Named::R,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(labels, ["I", "DT", "ST", "K", "F", "HF", "B", "R"]);
}

#[test]
fn operand_displays_like_its_variant() {
    assert_eq!(Operand::from(Addr::new(0x234)).to_string(), "a234");
    assert_eq!(Operand::from(Imm::new(0x07)).to_string(), "0x07");
    assert_eq!(Operand::from(Nibble::new(5)).to_string(), "0x5");
    assert_eq!(Operand::from(Reg::new(0xA)).to_string(), "V_A");
    assert_eq!(Operand::from(Named::Dt).to_string(), "DT");
}

#[test]
fn mnemonic_is_always_followed_by_a_space() {
    for (bytes, text) in [
        ([0x00, 0xE0], "CLS "),
        ([0x00, 0xEE], "RET "),
        ([0x00, 0xFD], "EXIT* "),
        ([0x01, 0x23], "IGNORE SYS CALL "),
        ([0x53, 0x05], "???0x5305??? "),
        ([0x12, 0x34], "JMP a234"),
    ] {
        assert_eq!(decode(&bytes).unwrap().to_string(), text);
    }
}

#[test]
fn unknown_mnemonic_embeds_raw_bytes() {
    let m = Mnemonic::Unknown { raw: [0x0A, 0xB0] };
    assert_eq!(m.to_string(), "???0x0AB0???");
    assert_eq!(m.name(), None);
}
