use crate::constants::STACK_DEPTH;
use crate::error::StackError;

/// # Stack
/// Stores return addresses when subroutines are called.
///
/// `sp` is the index of the next free slot, so an empty stack has `sp == 0`
/// and a full one has `sp == STACK_DEPTH`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    slots: [u16; STACK_DEPTH],
    sp: u8,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, addr: u16) -> Result<(), StackError> {
        let sp = self.sp as usize;
        if sp == STACK_DEPTH {
            return Err(StackError::Overflow(STACK_DEPTH));
        }
        self.slots[sp] = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, StackError> {
        if self.sp == 0 {
            return Err(StackError::Underflow);
        }
        self.sp -= 1;
        Ok(self.slots[self.sp as usize])
    }

    pub fn pointer(&self) -> u8 {
        self.sp
    }

    pub fn clear(&mut self) {
        self.sp = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push(0x202).unwrap();
        stack.push(0x304).unwrap();
        assert_eq!(stack.pointer(), 2);
        assert_eq!(stack.pop(), Ok(0x304));
        assert_eq!(stack.pop(), Ok(0x202));
        assert_eq!(stack.pointer(), 0);
    }

    #[test]
    fn test_overflow_leaves_stack_untouched() {
        let mut stack = Stack::new();
        for addr in 0..STACK_DEPTH as u16 {
            stack.push(addr).unwrap();
        }
        assert_eq!(stack.push(0xFFF), Err(StackError::Overflow(STACK_DEPTH)));
        assert_eq!(stack.pointer(), STACK_DEPTH as u8);
        assert_eq!(stack.pop(), Ok(STACK_DEPTH as u16 - 1));
    }

    #[test]
    fn test_underflow() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert_eq!(stack.pointer(), 0);
    }
}
