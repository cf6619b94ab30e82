use super::Ls8Inst;
use crate::consts::flags::{FL_EQ, FL_GT, FL_LT};
use crate::cpu::Ls8Cpu;
use crate::err::CpuError;

///
/// Control flow: halting, jumps and the CALL/RET pair. Every jump takes
/// its target from a register; a conditional jump whose condition does
/// not hold falls through to the next instruction.
///
pub trait Ls8ControlFlow {
    fn hlt(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn nop(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn jmp(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn jeq(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn jne(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn jgt(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn jlt(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn jge(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn jle(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn call(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn ret(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
}

impl<'a> Ls8ControlFlow for Ls8Cpu<'a> {
    fn hlt(&mut self, _inst: &Ls8Inst) -> Result<(), CpuError> {
        self.halt();
        Ok(())
    }

    fn nop(&mut self, _inst: &Ls8Inst) -> Result<(), CpuError> {
        Ok(())
    }

    fn jmp(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.branch_if(inst, true)
    }

    fn jeq(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let cond = self.fl & FL_EQ != 0;
        self.branch_if(inst, cond)
    }

    fn jne(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let cond = self.fl & FL_EQ == 0;
        self.branch_if(inst, cond)
    }

    fn jgt(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let cond = self.fl & FL_GT != 0;
        self.branch_if(inst, cond)
    }

    fn jlt(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let cond = self.fl & FL_LT != 0;
        self.branch_if(inst, cond)
    }

    fn jge(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let cond = self.fl & (FL_GT | FL_EQ) != 0;
        self.branch_if(inst, cond)
    }

    fn jle(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let cond = self.fl & (FL_LT | FL_EQ) != 0;
        self.branch_if(inst, cond)
    }

    fn call(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let target = self.reg_read(inst.operand_a)?;
        let ret_addr = self.pc().wrapping_add(1);
        self.stack_push(ret_addr)?;
        self.update_pc(target)
    }

    fn ret(&mut self, _inst: &Ls8Inst) -> Result<(), CpuError> {
        let addr = self.stack_pop()?;
        self.update_pc(addr)
    }
}
