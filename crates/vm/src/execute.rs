//! The fetch-decode-execute loop and per-opcode handlers.

use stacksim_common::Opcode;

use crate::error::RuntimeError;
use crate::machine::Machine;

impl Machine {
    /// Run the loaded program, starting at the lowest occupied address.
    ///
    /// Resets the program counter and output buffer, then loops until STOP,
    /// an empty slot (implicit halt), or a fatal condition. The data stack
    /// is deliberately not reset: a second run observes whatever the first
    /// one left behind.
    ///
    /// On success, returns the accumulated PRINT output. On failure, only
    /// the error is returned; partial output is not part of the result.
    ///
    /// There is no step limit. A CALL/RET cycle with no reachable STOP
    /// runs forever.
    pub fn execute(&mut self) -> Result<&str, RuntimeError> {
        let start = self.lowest_occupied().ok_or(RuntimeError::NoInstructions)?;
        self.pc = start;
        self.output.clear();
        self.running = true;

        while self.running {
            let Some(instruction) = self.memory.get(self.pc).copied().flatten() else {
                // Empty slot, or the counter ran off the end: implicit halt.
                break;
            };
            self.pc += 1;

            // The loader guarantees CALL and PUSH carry an operand; the
            // other opcodes never read it.
            let operand = instruction.operand.unwrap_or(0);

            match instruction.opcode {
                Opcode::Mult => self.exec_mult()?,
                Opcode::Call => self.exec_call(operand)?,
                Opcode::Ret => self.exec_ret()?,
                Opcode::Stop => self.running = false,
                Opcode::Print => self.exec_print()?,
                Opcode::Push => self.push(operand),
            }
        }

        Ok(&self.output)
    }

    /// MULT: pop two values, push their range-checked product.
    fn exec_mult(&mut self) -> Result<(), RuntimeError> {
        let a = self.pop()?;
        let b = self.pop()?;
        let product = self.check_range(i64::from(a) * i64::from(b))?;
        self.push(product);
        Ok(())
    }

    /// CALL addr: jump to addr. No return address is pushed; callers that
    /// want to come back PUSH their own before calling.
    fn exec_call(&mut self, addr: i32) -> Result<(), RuntimeError> {
        self.pc = self.jump_target(i64::from(addr))?;
        Ok(())
    }

    /// RET: pop an address and jump to it.
    fn exec_ret(&mut self) -> Result<(), RuntimeError> {
        let addr = self.pop()?;
        self.pc = self.jump_target(i64::from(addr))?;
        Ok(())
    }

    /// PRINT: pop a value and append it to the output as a decimal line.
    fn exec_print(&mut self) -> Result<(), RuntimeError> {
        let value = self.pop()?;
        self.output.push_str(&value.to_string());
        self.output.push('\n');
        Ok(())
    }

    /// The program counter must never land on an address with no
    /// instruction. Load-time validation bounds CALL targets, but slot
    /// occupancy (and anything popped by RET) can only be checked here.
    fn jump_target(&self, addr: i64) -> Result<usize, RuntimeError> {
        let occupied = addr >= 0
            && (addr as usize) < self.memory_size()
            && self.memory[addr as usize].is_some();
        if !occupied {
            return Err(RuntimeError::InvalidJumpTarget {
                at: self.current_address(),
                target: addr,
            });
        }
        Ok(addr as usize)
    }
}
