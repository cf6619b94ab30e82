use super::Ls8Inst;
use crate::alu::AluOp;
use crate::cpu::Ls8Cpu;
use crate::err::CpuError;

///
/// The ALU-dispatched instruction group. Each handler validates its
/// operand registers and hands off to the ALU; results are written back
/// to the first operand register, except CMP which only updates the
/// flags register.
///
pub trait Ls8Arith {
    fn add(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn sub(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn mul(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn div(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn modulo(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn inc(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn dec(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn and(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn or(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn xor(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn not(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn shl(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn shr(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
    fn cmp(&mut self, inst: &Ls8Inst) -> Result<(), CpuError>;
}

impl<'a> Ls8Arith for Ls8Cpu<'a> {
    fn add(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::ADD, inst)
    }

    fn sub(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::SUB, inst)
    }

    fn mul(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::MUL, inst)
    }

    fn div(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::DIV, inst)
    }

    fn modulo(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::MOD, inst)
    }

    fn inc(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::INC, inst)
    }

    fn dec(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::DEC, inst)
    }

    fn and(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::AND, inst)
    }

    fn or(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::OR, inst)
    }

    fn xor(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::XOR, inst)
    }

    fn not(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::NOT, inst)
    }

    fn shl(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::SHL, inst)
    }

    fn shr(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::SHR, inst)
    }

    fn cmp(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        self.alu(AluOp::CMP, inst)
    }
}
