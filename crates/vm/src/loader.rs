//! Loading: validate instructions and write them into machine memory.
//!
//! `set_address` and `insert` return `&mut Machine` on success so a program
//! can be keyed in as a chain that reads like an assembly listing:
//!
//! ```
//! use stacksim_common::Opcode;
//! use stacksim_vm::Machine;
//!
//! # fn main() -> Result<(), stacksim_common::LoadError> {
//! let mut machine = Machine::new(100);
//! machine
//!     .set_address(0)?
//!     .insert(Opcode::Push, Some(7))?
//!     .insert(Opcode::Print, None)?
//!     .insert(Opcode::Stop, None)?;
//! # Ok(())
//! # }
//! ```

use stacksim_common::{
    Instruction, LoadError, Opcode, Program, MAX_OPERAND, MIN_OPERAND,
};

use crate::machine::Machine;

impl Machine {
    /// Set the insertion cursor. Fails with `InvalidAddress` if `addr` is
    /// outside instruction memory.
    pub fn set_address(&mut self, addr: usize) -> Result<&mut Self, LoadError> {
        if addr >= self.memory_size() {
            return Err(LoadError::InvalidAddress {
                at: self.cursor,
                addr: addr as i64,
                memory_size: self.memory_size(),
            });
        }
        self.cursor = addr;
        Ok(self)
    }

    /// Validate one instruction and write it at the insertion cursor,
    /// advancing the cursor by one.
    ///
    /// Shape is checked first (operand present exactly when the opcode
    /// requires one), then the operand itself: a CALL target must be a valid
    /// address, a PUSH value must fit the 32-bit signed range. Writing to an
    /// occupied slot silently overwrites.
    pub fn insert(
        &mut self,
        opcode: Opcode,
        operand: Option<i64>,
    ) -> Result<&mut Self, LoadError> {
        let instruction = match opcode {
            Opcode::Call | Opcode::Push => {
                let Some(raw) = operand else {
                    return Err(LoadError::MissingOperand {
                        at: self.cursor,
                        opcode,
                    });
                };
                let value = if opcode == Opcode::Call {
                    self.validate_address(raw)?
                } else {
                    self.validate_operand(raw)?
                };
                Instruction::with_operand(opcode, value)
            }
            _ => {
                if operand.is_some() {
                    return Err(LoadError::UnexpectedOperand {
                        at: self.cursor,
                        opcode,
                    });
                }
                Instruction::new(opcode)
            }
        };

        if self.cursor >= self.memory_size() {
            return Err(LoadError::MemoryOverflow {
                at: self.cursor,
                memory_size: self.memory_size(),
            });
        }
        self.memory[self.cursor] = Some(instruction);
        self.cursor += 1;
        Ok(self)
    }

    /// Load a program: for each record, `set_address` then `insert`.
    ///
    /// Clears the output buffer, then aborts on the first validation
    /// failure. Records already written by this call stay in memory; there
    /// is no rollback. A spurious operand on a no-operand record is dropped
    /// rather than rejected, matching the insert call the record stands for.
    pub fn load(&mut self, program: &Program) -> Result<(), LoadError> {
        self.output.clear();
        for entry in &program.entries {
            self.set_address(entry.address)?;
            let operand = if entry.opcode.requires_operand() {
                entry.operand
            } else {
                None
            };
            self.insert(entry.opcode, operand)?;
        }
        Ok(())
    }

    /// A CALL operand must name an address inside instruction memory.
    fn validate_address(&self, addr: i64) -> Result<i32, LoadError> {
        if addr < 0 || addr >= self.memory_size() as i64 {
            return Err(LoadError::InvalidAddress {
                at: self.cursor,
                addr,
                memory_size: self.memory_size(),
            });
        }
        Ok(addr as i32)
    }

    /// A PUSH operand must fit the 32-bit signed range.
    fn validate_operand(&self, operand: i64) -> Result<i32, LoadError> {
        if operand > MAX_OPERAND || operand < MIN_OPERAND {
            return Err(LoadError::OperandOutOfRange {
                at: self.cursor,
                operand,
            });
        }
        Ok(operand as i32)
    }
}
