use crate::opcode::{self, Opcode};

/// Renders an opcode in conventional Chip-8 assembly syntax.
///
/// Anything outside the instruction set is rendered as a raw data word,
/// `DW xxxx`, mirroring how the executor treats it as a no-op.
pub fn mnemonic(op: &dyn Opcode) -> String {
    let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => "CLS".to_string(),
        (0x0, 0x0, 0xE, 0xE) => "RET".to_string(),
        (0x0, ..) => format!("SYS {:03X}", addr),
        (0x1, ..) => format!("JP {:03X}", addr),
        (0x2, ..) => format!("CALL {:03X}", addr),
        (0x3, ..) => format!("SE V{:X}, {:02X}", x, kk),
        (0x4, ..) => format!("SNE V{:X}, {:02X}", x, kk),
        (0x5, .., 0x0) => format!("SE V{:X}, V{:X}", x, y),
        (0x6, ..) => format!("LD V{:X}, {:02X}", x, kk),
        (0x7, ..) => format!("ADD V{:X}, {:02X}", x, kk),
        (0x8, .., 0x0) => format!("LD V{:X}, V{:X}", x, y),
        (0x8, .., 0x1) => format!("OR V{:X}, V{:X}", x, y),
        (0x8, .., 0x2) => format!("AND V{:X}, V{:X}", x, y),
        (0x8, .., 0x3) => format!("XOR V{:X}, V{:X}", x, y),
        (0x8, .., 0x4) => format!("ADD V{:X}, V{:X}", x, y),
        (0x8, .., 0x5) => format!("SUB V{:X}, V{:X}", x, y),
        (0x8, .., 0x6) => format!("SHR V{:X}, V{:X}", x, y),
        (0x8, .., 0x7) => format!("SUBN V{:X}, V{:X}", x, y),
        (0x8, .., 0xE) => format!("SHL V{:X}, V{:X}", x, y),
        (0x9, .., 0x0) => format!("SNE V{:X}, V{:X}", x, y),
        (0xA, ..) => format!("LD I, {:03X}", addr),
        (0xB, ..) => format!("JP V0, {:03X}", addr),
        (0xC, ..) => format!("RND V{:X}, {:02X}", x, kk),
        (0xD, ..) => format!("DRW V{:X}, V{:X}, {:X}", x, y, n),
        (0xE, .., 0x9, 0xE) => format!("SKP V{:X}", x),
        (0xE, .., 0xA, 0x1) => format!("SKNP V{:X}", x),
        (0xF, .., 0x0, 0x7) => format!("LD V{:X}, DT", x),
        (0xF, .., 0x0, 0xA) => format!("LD V{:X}, K", x),
        (0xF, .., 0x1, 0x5) => format!("LD DT, V{:X}", x),
        (0xF, .., 0x1, 0x8) => format!("LD ST, V{:X}", x),
        (0xF, .., 0x1, 0xE) => format!("ADD I, V{:X}", x),
        (0xF, .., 0x2, 0x9) => format!("LD F, V{:X}", x),
        (0xF, .., 0x3, 0x3) => format!("LD B, V{:X}", x),
        (0xF, .., 0x5, 0x5) => format!("LD [I], V{:X}", x),
        (0xF, .., 0x6, 0x5) => format!("LD V{:X}, [I]", x),
        _ => format!("DW {:04X}", op.raw()),
    }
}

/// Lists a program image as `address  opcode  mnemonic` lines, assuming it is
/// loaded at `origin`. A trailing odd byte is listed as a data byte.
pub fn disassemble(program: &[u8], origin: u16) -> Vec<String> {
    program
        .chunks(2)
        .enumerate()
        .map(|(word, bytes)| (bytes, origin.wrapping_add((word * 2) as u16)))
        .map(|(bytes, addr)| match *bytes {
            [high, low] => {
                let op = opcode::from_bytes(high, low);
                format!("{:03X}  {:04X}  {}", addr, op, mnemonic(&op))
            }
            [byte] => format!("{:03X}  {:02X}    DB {:02X}", addr, byte, byte),
            _ => unreachable!("chunks(2) yields one or two bytes"),
        })
        .collect()
}
