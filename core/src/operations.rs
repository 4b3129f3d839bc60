use log::{error, warn};
use rand::{Rng, RngCore};

use crate::constants::{SPRITE_HEIGHT, SPRITE_SHEET_START};
use crate::display::Display;
use crate::input::Input;
use crate::opcode::{self, Opcode};
use crate::quirks::{JumpQuirk, Quirks, ShiftQuirk};
use crate::state::State;

/// What the executor does with the program counter once an operation returns.
///
/// Operations never touch the pc themselves, which keeps "advance" and "jump"
/// mutually exclusive within a cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance to the next instruction.
    Next,
    /// Advance past the next instruction.
    Skip,
    /// Continue at the given address.
    Jump(u16),
    /// Stay on this instruction; it runs again next cycle.
    Wait,
}

impl Flow {
    fn skip_if(condition: bool) -> Self {
        if condition {
            Flow::Skip
        } else {
            Flow::Next
        }
    }
}

/// Everything outside of `State` an operation may touch.
pub struct Context<'a> {
    pub display: &'a mut dyn Display,
    pub input: &'a mut dyn Input,
    pub rng: &'a mut dyn RngCore,
    pub quirks: Quirks,
}

/// Signature shared by every operation.
pub type Operation = fn(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow;

/// clear
pub fn clr(_op: &dyn Opcode, _state: &mut State, ctx: &mut Context<'_>) -> Flow {
    ctx.display.clear();
    Flow::Next
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    match state.stack.pop() {
        Ok(addr) => Flow::Jump(addr),
        Err(e) => {
            error!("{} at {:#05X}; ignoring RET", e, state.pc.current());
            Flow::Next
        }
    }
}

/// PC = addr
pub fn jump(op: &dyn Opcode, _state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    Flow::Jump(op.addr())
}

/// STACK.push(PC + 2); PC = addr
pub fn call(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    match state.stack.push(state.pc.next()) {
        Ok(()) => Flow::Jump(op.addr()),
        Err(e) => {
            error!("{} at {:#05X}; ignoring CALL", e, state.pc.current());
            Flow::Next
        }
    }
}

/// if Vx == kk then pc += 2
pub fn ske(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    Flow::skip_if(state.registers.get(op.x()) == op.kk())
}

/// if Vx != kk then pc += 2
pub fn skne(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    Flow::skip_if(state.registers.get(op.x()) != op.kk())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    Flow::skip_if(state.registers.get(op.x()) == state.registers.get(op.y()))
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    state.registers.set(op.x(), op.kk());
    Flow::Next
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let res = state.registers.get(op.x()).wrapping_add(op.kk());
    state.registers.set(op.x(), res);
    Flow::Next
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    state.registers.set(op.x(), state.registers.get(op.y()));
    Flow::Next
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let res = state.registers.get(op.x()) | state.registers.get(op.y());
    state.registers.set(op.x(), res);
    Flow::Next
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let res = state.registers.get(op.x()) & state.registers.get(op.y());
    state.registers.set(op.x(), res);
    Flow::Next
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let res = state.registers.get(op.x()) ^ state.registers.get(op.y());
    state.registers.set(op.x(), res);
    Flow::Next
}

/// Vx += Vy; VF = overflow
pub fn addr(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let (res, over) = state
        .registers
        .get(op.x())
        .overflowing_add(state.registers.get(op.y()));
    state.registers.set(op.x(), res);
    state.registers.set_flag(over);
    Flow::Next
}

/// Vx -= Vy; VF = !underflow
pub fn sub(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let (res, under) = state
        .registers
        .get(op.x())
        .overflowing_sub(state.registers.get(op.y()));
    state.registers.set(op.x(), res);
    state.registers.set_flag(!under);
    Flow::Next
}

/// The value 8xy6 and 8xyE shift, which depends on the shift quirk.
fn shift_source(op: &dyn Opcode, state: &State, quirks: Quirks) -> u8 {
    match quirks.shift {
        ShiftQuirk::Modern => state.registers.get(op.x()),
        ShiftQuirk::Legacy => state.registers.get(op.y()),
    }
}

/// Vx = src >> 1; VF = shifted out bit
pub fn shr(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    let src = shift_source(op, state, ctx.quirks);
    state.registers.set(op.x(), src >> 1);
    state.registers.set_flag(src & 0x1 == 0x1);
    Flow::Next
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let (res, under) = state
        .registers
        .get(op.y())
        .overflowing_sub(state.registers.get(op.x()));
    state.registers.set(op.x(), res);
    state.registers.set_flag(!under);
    Flow::Next
}

/// Vx = src << 1; VF = shifted out bit
pub fn shl(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    let src = shift_source(op, state, ctx.quirks);
    state.registers.set(op.x(), src << 1);
    state.registers.set_flag(src & 0x80 == 0x80);
    Flow::Next
}

/// if Vx != Vy then pc +=2
pub fn skrne(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    Flow::skip_if(state.registers.get(op.x()) != state.registers.get(op.y()))
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    state.registers.i = op.addr();
    Flow::Next
}

/// PC = V0 + addr
/// The sum is masked to the address space by the pc.
pub fn jumpi(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    let offset = match ctx.quirks.jump_offset {
        JumpQuirk::V0 => state.registers.get(0x0),
        JumpQuirk::Vx => state.registers.get(op.x()),
    };
    Flow::Jump(op.addr() + u16::from(offset))
}

/// Vx = rand_byte & kk
pub fn rand(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    let rand_byte: u8 = ctx.rng.gen();
    state.registers.set(op.x(), rand_byte & op.kk());
    Flow::Next
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y with wrapping.
/// Sets VF if any pixels were erased
pub fn draw(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    let x = state.registers.get(op.x());
    let y = state.registers.get(op.y());
    let mut erased = false;

    for row in 0..op.n() {
        let byte = state
            .memory
            .read(state.registers.i.wrapping_add(u16::from(row)));
        erased |= ctx.display.draw_byte(x, y.wrapping_add(row), byte);
    }

    state.registers.set_flag(erased);
    Flow::Next
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    Flow::skip_if(ctx.input.is_pressed(state.registers.get(op.x())))
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    Flow::skip_if(!ctx.input.is_pressed(state.registers.get(op.x())))
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    state.registers.set(op.x(), state.registers.delay_timer);
    Flow::Next
}

/// await keypress for Vx
/// Re-runs every cycle until the input reports a press.
pub fn keyd(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    match ctx.input.poll_for_press() {
        Some(key) => {
            state.registers.set(op.x(), key);
            Flow::Next
        }
        None => Flow::Wait,
    }
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    state.registers.delay_timer = state.registers.get(op.x());
    Flow::Next
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    state.registers.sound_timer = state.registers.get(op.x());
    Flow::Next
}

/// I += Vx
pub fn addi(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    state.registers.i = state
        .registers
        .i
        .wrapping_add(u16::from(state.registers.get(op.x())));
    Flow::Next
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let digit = u16::from(state.registers.get(op.x()) & 0xF);
    state.registers.i = SPRITE_SHEET_START + digit * SPRITE_HEIGHT;
    Flow::Next
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    let i = state.registers.i;
    for (offset, digit) in (0..).zip(opcode::bcd(state.registers.get(op.x())).iter()) {
        state.memory.write(i.wrapping_add(offset), *digit);
    }
    Flow::Next
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    let i = state.registers.i;
    for x in 0..=op.x() {
        state
            .memory
            .write(i.wrapping_add(u16::from(x)), state.registers.get(x));
    }
    if ctx.quirks.load_store_increments_i {
        state.registers.i = i.wrapping_add(u16::from(op.x()) + 1);
    }
    Flow::Next
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &dyn Opcode, state: &mut State, ctx: &mut Context<'_>) -> Flow {
    let i = state.registers.i;
    for x in 0..=op.x() {
        let value = state.memory.read(i.wrapping_add(u16::from(x)));
        state.registers.set(x, value);
    }
    if ctx.quirks.load_store_increments_i {
        state.registers.i = i.wrapping_add(u16::from(op.x()) + 1);
    }
    Flow::Next
}

/// Anything not in the instruction set runs as a no-op.
pub fn unknown(op: &dyn Opcode, state: &mut State, _ctx: &mut Context<'_>) -> Flow {
    warn!(
        "unknown opcode {:04X} at {:#05X}; skipping",
        op.raw(),
        state.pc.current()
    );
    Flow::Next
}
