use super::Ls8Inst;
use crate::consts::cpu::{NUM_IRQ_LINES, REG_IM, REG_IS};
use crate::cpu::Ls8Cpu;
use crate::err::CpuError;

pub trait Ls8Interrupt {
    fn int(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn iret(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
}

impl<'a> Ls8Interrupt for Ls8Cpu<'a> {
    ///
    /// Raise an interrupt line: set the corresponding bit in the
    /// interrupt status register. Whether it fires is up to the mask;
    /// the controller picks it up before the next fetch.
    ///
    fn int(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let line = self.reg_read(inst.operand_a)?;
        if line as usize >= NUM_IRQ_LINES {
            return Err(CpuError::InvalidInterruptNumber {
                num: line,
                pc: inst.pc,
            });
        }
        self.reg[REG_IS] |= 1 << line;
        Ok(())
    }

    ///
    /// Return from an interrupt handler: pop R6 down to R0, then the
    /// flags register, then the resume address, and finally restore the
    /// interrupt mask saved at the most recent interrupt entry.
    ///
    fn iret(&mut self, _inst: &Ls8Inst) -> Result<(), CpuError> {
        for i in (0..=REG_IS).rev() {
            let val = self.stack_pop()?;
            self.reg[i] = val;
        }
        self.fl = self.stack_pop()?;
        let resume = self.stack_pop()?;
        self.update_pc(resume)?;

        if let Some(im) = self.im_stack.pop() {
            self.reg[REG_IM] = im;
        }
        Ok(())
    }
}
