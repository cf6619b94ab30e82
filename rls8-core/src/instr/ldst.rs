use super::Ls8Inst;
use crate::cpu::Ls8Cpu;
use crate::err::CpuError;

///
/// Register loads/stores and the two console output instructions. LD
/// and ST address memory indirectly through a register; PRN writes a
/// decimal line and PRA writes a single character with no newline.
///
pub trait Ls8LoadStore {
    fn ldi(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn ld(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn st(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn prn(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn pra(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
}

impl<'a> Ls8LoadStore for Ls8Cpu<'a> {
    fn ldi(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.reg_write(inst.operand_a, inst.operand_b)
    }

    fn ld(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let addr = self.reg_read(inst.operand_b)?;
        let val = self.mem_read(addr as usize)?;
        self.reg_write(inst.operand_a, val)
    }

    fn st(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let addr = self.reg_read(inst.operand_a)?;
        let val = self.reg_read(inst.operand_b)?;
        self.mem_write(addr as usize, val)
    }

    fn prn(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let val = self.reg_read(inst.operand_a)?;
        self.print_decimal(val)
    }

    fn pra(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        let val = self.reg_read(inst.operand_a)?;
        self.print_char(val)
    }
}
