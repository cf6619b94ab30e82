use super::Ls8Inst;
use crate::cpu::Ls8Cpu;
use crate::err::CpuError;

pub trait Ls8Stack {
    fn push(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn pop(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
}

impl<'a> Ls8Stack for Ls8Cpu<'a> {
    fn push(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let val = self.reg_read(inst.operand_a)?;
        self.stack_push(val)
    }

    fn pop(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        // Validate the destination register before touching the stack,
        // so an underflow leaves SP where it was.
        self.reg_read(inst.operand_a)?;
        let val = self.stack_pop()?;
        self.reg_write(inst.operand_a, val)
    }
}
