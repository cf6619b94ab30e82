use thiserror::Error;

use crate::alu::AluOp;

///
/// Error taxonomy for the LS-8 machine. `DivideByZero` is the single
/// recoverable condition: the run loop reports it and halts cleanly,
/// leaving the machine state intact for inspection. Everything else is
/// an invariant violation and aborts the run.
///
#[derive(Error, Debug)]
pub enum CpuError {
    #[error("invalid register r{reg} at pc 0x{pc:02x}")]
    InvalidRegister { reg: u8, pc: u8 },

    #[error("memory address out of range: 0x{addr:x}")]
    AddressOutOfRange { addr: usize },

    #[error("unknown opcode 0b{opcode:08b} at pc 0x{pc:02x}")]
    UnknownOpcode { opcode: u8, pc: u8 },

    #[error("empty stack at pc 0x{pc:02x}")]
    StackUnderflow { pc: u8 },

    #[error("stack overflow at pc 0x{pc:02x}")]
    StackOverflow { pc: u8 },

    #[error("divide by zero in {op:?} at pc 0x{pc:02x}")]
    DivideByZero { op: AluOp, pc: u8 },

    #[error("invalid interrupt number {num} at pc 0x{pc:02x}")]
    InvalidInterruptNumber { num: u8, pc: u8 },

    #[error("program counter 0x{addr:02x} points into the stack region")]
    PcIntoStack { addr: u8 },

    #[error("program too large: {len} instruction bytes reach the stack base")]
    ProgramTooLarge { len: usize },

    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),
}
