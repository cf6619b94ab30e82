/* Size of the flat LS-8 memory space, in bytes */
pub const MEM_SIZE: usize = 256;

/* Number of general purpose registers within the LS-8 */
pub const NUM_REGS: usize = 8;

pub mod cpu {
    /* Reserved register indices. R5-R7 carry the interrupt mask, the
     * interrupt status and the stack pointer. */
    pub const REG_IM: usize = 5;
    pub const REG_IS: usize = 6;
    pub const REG_SP: usize = 7;

    /* The stack grows downward from STACK_BASE. Everything at or above
     * STACK_BASE is reserved: the default interrupt return slot at 0xF7
     * and the interrupt vector table at 0xF8-0xFF. */
    pub const STACK_BASE: u8 = 0xF4;
    pub const DEFAULT_ISR_ADDR: u8 = 0xF7;
    pub const VECTOR_BASE: u8 = 0xF8;
    pub const NUM_IRQ_LINES: usize = 8;
}

pub mod flags {
    /* Flags register layout is 0b00000LGE, set by CMP only */
    pub const FL_EQ: u8 = 0b001;
    pub const FL_GT: u8 = 0b010;
    pub const FL_LT: u8 = 0b100;
}

pub mod fields {
    /* Opcode bit fields: AABCDDDD. AA is the operand count, B marks an
     * ALU-dispatched instruction, C marks an instruction that sets the
     * program counter itself. */
    pub const OPERAND_COUNT_SHIFT: u8 = 6;
    pub const ALU_MASK: u8 = 0b0010_0000;
    pub const SETS_PC_MASK: u8 = 0b0001_0000;
}

pub mod opcodes {
    pub const NOP: u8 = 0b0000_0000;
    pub const HLT: u8 = 0b0000_0001;
    pub const RET: u8 = 0b0001_0001;
    pub const IRET: u8 = 0b0001_0011;
    pub const PUSH: u8 = 0b0100_0101;
    pub const POP: u8 = 0b0100_0110;
    pub const PRN: u8 = 0b0100_0111;
    pub const PRA: u8 = 0b0100_1000;
    pub const CALL: u8 = 0b0101_0000;
    pub const INT: u8 = 0b0101_0010;
    pub const JMP: u8 = 0b0101_0100;
    pub const JEQ: u8 = 0b0101_0101;
    pub const JNE: u8 = 0b0101_0110;
    pub const JGT: u8 = 0b0101_0111;
    pub const JLT: u8 = 0b0101_1000;
    pub const JLE: u8 = 0b0101_1001;
    pub const JGE: u8 = 0b0101_1010;
    pub const INC: u8 = 0b0110_0101;
    pub const DEC: u8 = 0b0110_0110;
    pub const NOT: u8 = 0b0110_1001;
    pub const LDI: u8 = 0b1000_0010;
    pub const LD: u8 = 0b1000_0011;
    pub const ST: u8 = 0b1000_0100;
    pub const ADD: u8 = 0b1010_0000;
    pub const SUB: u8 = 0b1010_0001;
    pub const MUL: u8 = 0b1010_0010;
    pub const DIV: u8 = 0b1010_0011;
    pub const MOD: u8 = 0b1010_0100;
    pub const CMP: u8 = 0b1010_0111;
    pub const AND: u8 = 0b1010_1000;
    pub const OR: u8 = 0b1010_1010;
    pub const XOR: u8 = 0b1010_1011;
    pub const SHL: u8 = 0b1010_1100;
    pub const SHR: u8 = 0b1010_1101;
}
