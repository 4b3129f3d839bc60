use proptest::prelude::*;

use emu8_core::constants::STACK_DEPTH;
use emu8_core::{Chip8, FrameBuffer, Keypad};

fn chip8(program: &[u8]) -> Chip8<FrameBuffer, Keypad> {
    let mut chip8 = Chip8::new(FrameBuffer::new(), Keypad::new()).with_seed(0);
    chip8.load_program(program).unwrap();
    chip8
}

/// LD V1, a; LD V2, b; 8 1 2 op
fn arithmetic(a: u8, b: u8, op: u8) -> Chip8<FrameBuffer, Keypad> {
    let mut chip8 = chip8(&[0x61, a, 0x62, b, 0x81, 0x20 | op]);
    chip8.run(3);
    chip8
}

/// `depth` CALLs, each to the instruction right after it.
fn nested_calls(depth: usize) -> Vec<u8> {
    (0..depth)
        .flat_map(|k| {
            let target = 0x200 + 2 * (k as u16 + 1);
            vec![0x20 | (target >> 8) as u8, target as u8]
        })
        .chain(vec![0x00, 0xEE])
        .collect()
}

proptest! {
    #[test]
    fn add_sets_carry_past_255(a in any::<u8>(), b in any::<u8>()) {
        let chip8 = arithmetic(a, b, 0x4);
        let registers = &chip8.state().registers;
        prop_assert_eq!(registers.v[0x1], a.wrapping_add(b));
        prop_assert_eq!(registers.flag(), (a as u16 + b as u16 > 255) as u8);
    }

    #[test]
    fn sub_sets_no_borrow(a in any::<u8>(), b in any::<u8>()) {
        let chip8 = arithmetic(a, b, 0x5);
        let registers = &chip8.state().registers;
        prop_assert_eq!(registers.v[0x1], a.wrapping_sub(b));
        prop_assert_eq!(registers.flag(), (a >= b) as u8);
    }

    #[test]
    fn return_resumes_after_innermost_call(depth in 1..=STACK_DEPTH) {
        let mut chip8 = chip8(&nested_calls(depth));
        chip8.run(depth);
        prop_assert_eq!(chip8.state().stack.pointer() as usize, depth);

        chip8.step();
        prop_assert_eq!(chip8.state().pc.current(), 0x200 + 2 * depth as u16);
        prop_assert_eq!(chip8.state().stack.pointer() as usize, depth - 1);
    }

    #[test]
    fn drawing_twice_restores_frame(
        x in any::<u8>(),
        y in any::<u8>(),
        sprite in proptest::collection::vec(any::<u8>(), 1..16),
    ) {
        // LD I, 300; LD V0, x; LD V1, y; DRW V0, V1, n; DRW V0, V1, n
        let n = sprite.len() as u8;
        let mut program = vec![0xA3, 0x00, 0x60, x, 0x61, y, 0xD0, 0x10 | n, 0xD0, 0x10 | n];
        program.resize(0x100, 0);
        program.extend_from_slice(&sprite);
        let mut chip8 = chip8(&program);

        chip8.run(4);
        prop_assert_eq!(chip8.state().registers.flag(), 0);

        chip8.step();
        let any_lit = sprite.iter().any(|&row| row != 0);
        prop_assert_eq!(chip8.state().registers.flag(), any_lit as u8);
        prop_assert!(chip8.display().pixels().iter().flatten().all(|&p| p == 0));
    }
}

#[test]
fn seventeenth_call_is_refused() {
    let mut chip8 = chip8(&nested_calls(STACK_DEPTH + 1));
    chip8.run(STACK_DEPTH);
    assert_eq!(chip8.state().stack.pointer() as usize, STACK_DEPTH);

    chip8.step();
    assert_eq!(chip8.state().stack.pointer() as usize, STACK_DEPTH);
    assert_eq!(
        chip8.state().pc.current(),
        0x200 + 2 * (STACK_DEPTH as u16 + 1)
    );
}

#[test]
fn bcd_of_extremes() {
    // LD I, 300; LD V0, FF; LD B, V0; LD V0, 07; LD I, 303; LD B, V0
    let mut chip8 = chip8(&[
        0xA3, 0x00, 0x60, 0xFF, 0xF0, 0x33, 0x60, 0x07, 0xA3, 0x03, 0xF0, 0x33,
    ]);
    chip8.run(6);
    let memory = &chip8.state().memory;
    let digits: Vec<u8> = (0x300..0x306).map(|addr| memory.read(addr)).collect();
    assert_eq!(digits, vec![2, 5, 5, 0, 0, 7]);
}
