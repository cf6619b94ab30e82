pub mod arith;
pub mod cf;
pub mod intrpt;
pub mod ldst;
pub mod stack;

pub use arith::Ls8Arith;
pub use cf::Ls8ControlFlow;
pub use intrpt::Ls8Interrupt;
pub use ldst::Ls8LoadStore;
pub use stack::Ls8Stack;

#[cfg(test)]
pub mod tests;

use crate::consts::{fields, opcodes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ls8Mnem {
    ADD,
    AND,
    CALL,
    CMP,
    DEC,
    DIV,
    HLT,
    INC,
    INT,
    IRET,
    JEQ,
    JGE,
    JGT,
    JLE,
    JLT,
    JMP,
    JNE,
    LD,
    LDI,
    MOD,
    MUL,
    NOP,
    NOT,
    OR,
    POP,
    PRA,
    PRN,
    PUSH,
    RET,
    SHL,
    SHR,
    ST,
    SUB,
    XOR,
}

///
/// Decode one opcode byte to its mnemonic. This table is the single
/// source of truth for the instruction set; an opcode missing here is
/// unknown to the machine.
///
pub fn decode(opcode: u8) -> Option<Ls8Mnem> {
    let mnem = match opcode {
        opcodes::NOP => Ls8Mnem::NOP,
        opcodes::HLT => Ls8Mnem::HLT,
        opcodes::RET => Ls8Mnem::RET,
        opcodes::IRET => Ls8Mnem::IRET,
        opcodes::PUSH => Ls8Mnem::PUSH,
        opcodes::POP => Ls8Mnem::POP,
        opcodes::PRN => Ls8Mnem::PRN,
        opcodes::PRA => Ls8Mnem::PRA,
        opcodes::CALL => Ls8Mnem::CALL,
        opcodes::INT => Ls8Mnem::INT,
        opcodes::JMP => Ls8Mnem::JMP,
        opcodes::JEQ => Ls8Mnem::JEQ,
        opcodes::JNE => Ls8Mnem::JNE,
        opcodes::JGT => Ls8Mnem::JGT,
        opcodes::JLT => Ls8Mnem::JLT,
        opcodes::JLE => Ls8Mnem::JLE,
        opcodes::JGE => Ls8Mnem::JGE,
        opcodes::INC => Ls8Mnem::INC,
        opcodes::DEC => Ls8Mnem::DEC,
        opcodes::NOT => Ls8Mnem::NOT,
        opcodes::LDI => Ls8Mnem::LDI,
        opcodes::LD => Ls8Mnem::LD,
        opcodes::ST => Ls8Mnem::ST,
        opcodes::ADD => Ls8Mnem::ADD,
        opcodes::SUB => Ls8Mnem::SUB,
        opcodes::MUL => Ls8Mnem::MUL,
        opcodes::DIV => Ls8Mnem::DIV,
        opcodes::MOD => Ls8Mnem::MOD,
        opcodes::CMP => Ls8Mnem::CMP,
        opcodes::AND => Ls8Mnem::AND,
        opcodes::OR => Ls8Mnem::OR,
        opcodes::XOR => Ls8Mnem::XOR,
        opcodes::SHL => Ls8Mnem::SHL,
        opcodes::SHR => Ls8Mnem::SHR,
        _ => return None,
    };
    Some(mnem)
}

///
/// One decoded instruction: the opcode byte, its mnemonic, the address
/// it was fetched from and up to two operand bytes. Operands the
/// encoding does not carry are left at zero.
///
#[derive(Debug)]
pub struct Ls8Inst {
    pub pc: u8,
    pub opcode: u8,
    pub mnem: Ls8Mnem,
    pub operand_a: u8,
    pub operand_b: u8,
}

impl Ls8Inst {
    #[allow(dead_code)]
    pub fn new(opcode: u8, mnem: Ls8Mnem) -> Ls8Inst {
        Ls8Inst {
            pc: 0,
            opcode,
            mnem,
            operand_a: 0,
            operand_b: 0,
        }
    }

    /// Top two bits of the opcode: how many operand bytes follow it.
    pub fn operand_count(&self) -> u8 {
        self.opcode >> fields::OPERAND_COUNT_SHIFT
    }

    /// Bit 5: the instruction is dispatched to the ALU.
    pub fn is_alu(&self) -> bool {
        self.opcode & fields::ALU_MASK != 0
    }

    /// Bit 4: the instruction sets the PC itself, so the execution loop
    /// must not advance it afterwards.
    pub fn sets_pc(&self) -> bool {
        self.opcode & fields::SETS_PC_MASK != 0
    }
}
