use std::io::Write;

use log::{debug, error, trace};

use crate::alu::{self, AluOp, AluOutput};
use crate::consts::cpu::*;
use crate::consts::{fields, opcodes, NUM_REGS};
use crate::err::CpuError;
use crate::instr::{decode, Ls8Inst, Ls8Mnem};
use crate::instr::{Ls8Arith, Ls8ControlFlow, Ls8Interrupt, Ls8LoadStore, Ls8Stack};
use crate::mem::Ls8Ram;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    Running,
    Halted,
}

///
/// The LS-8 machine: 256 bytes of RAM, eight byte registers, a 3-bit
/// flags register and the program counter. The console sink receives
/// PRN/PRA output; everything else is internal state. The machine is
/// fully synchronous and single-threaded, so the run loop owns all of
/// it exclusively.
///
pub struct Ls8Cpu<'a> {
    pub(crate) ram: Ls8Ram,
    pub(crate) reg: [u8; NUM_REGS],
    pub(crate) fl: u8,
    pc: u8,
    pub ir: u8,
    state: CpuState,

    // Interrupt masks saved at each interrupt entry, restored by IRET.
    // A LIFO so nested interrupts unwind correctly.
    pub(crate) im_stack: Vec<u8>,

    console: &'a mut dyn Write,
}

impl<'a> Ls8Cpu<'a> {
    pub fn new(console: &'a mut dyn Write) -> Ls8Cpu<'a> {
        let mut cpu = Ls8Cpu {
            ram: Ls8Ram::new(),
            reg: [0; NUM_REGS],
            fl: 0,
            pc: 0,
            ir: 0,
            state: CpuState::Running,
            im_stack: Vec::new(),
            console,
        };
        cpu.reset();
        cpu
    }

    pub fn reset(&mut self) {
        self.reg = [0; NUM_REGS];
        self.reg[REG_SP] = STACK_BASE;
        self.fl = 0;
        self.pc = 0;
        self.ir = 0;
        self.state = CpuState::Running;
        self.im_stack.clear();
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn halt(&mut self) {
        self.state = CpuState::Halted;
    }

    ///
    /// Validated program counter update. The PC may land anywhere below
    /// the stack base, plus exactly the default interrupt return slot at
    /// 0xF7; any other target inside [STACK_BASE, 0x100) is a fatal
    /// invariant violation.
    ///
    pub fn update_pc(&mut self, val: u8) -> Result<(), CpuError> {
        if val >= STACK_BASE && val != DEFAULT_ISR_ADDR {
            return Err(CpuError::PcIntoStack { addr: val });
        }
        self.pc = val;
        Ok(())
    }

    pub fn reg_read(&self, idx: u8) -> Result<u8, CpuError> {
        if idx as usize >= NUM_REGS {
            return Err(CpuError::InvalidRegister {
                reg: idx,
                pc: self.pc,
            });
        }
        Ok(self.reg[idx as usize])
    }

    pub fn reg_write(&mut self, idx: u8, val: u8) -> Result<(), CpuError> {
        if idx as usize >= NUM_REGS {
            return Err(CpuError::InvalidRegister {
                reg: idx,
                pc: self.pc,
            });
        }
        self.reg[idx as usize] = val;
        Ok(())
    }

    pub fn mem_read(&self, addr: usize) -> Result<u8, CpuError> {
        self.ram.read(addr)
    }

    pub fn mem_write(&mut self, addr: usize, val: u8) -> Result<(), CpuError> {
        self.ram.write(addr, val)
    }

    ///
    /// Push one byte onto the downward-growing stack. The stack pointer
    /// must never wrap below address 0.
    ///
    pub(crate) fn stack_push(&mut self, val: u8) -> Result<(), CpuError> {
        let sp = self.reg[REG_SP];
        if sp == 0 {
            return Err(CpuError::StackOverflow { pc: self.pc });
        }
        self.reg[REG_SP] = sp - 1;
        self.ram.write((sp - 1) as usize, val)
    }

    ///
    /// Pop one byte off the stack. An empty stack (SP back at the stack
    /// base) is an underflow and leaves SP untouched.
    ///
    pub(crate) fn stack_pop(&mut self) -> Result<u8, CpuError> {
        let sp = self.reg[REG_SP];
        if sp >= STACK_BASE {
            return Err(CpuError::StackUnderflow { pc: self.pc });
        }
        let val = self.ram.read(sp as usize)?;
        self.reg[REG_SP] = sp + 1;
        Ok(val)
    }

    ///
    /// Load a program image into RAM starting at address 0, then set up
    /// the interrupt vector table: 0xF7 holds the built-in IRET used as
    /// the default handler, and every vector entry points at it until a
    /// program overwrites one.
    ///
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), CpuError> {
        if image.len() >= STACK_BASE as usize {
            return Err(CpuError::ProgramTooLarge { len: image.len() });
        }
        for (addr, byte) in image.iter().enumerate() {
            self.ram.write(addr, *byte)?;
        }
        self.ram.write(DEFAULT_ISR_ADDR as usize, opcodes::IRET)?;
        for line in 0..NUM_IRQ_LINES {
            self.ram.write(VECTOR_BASE as usize + line, DEFAULT_ISR_ADDR)?;
        }
        Ok(())
    }

    pub(crate) fn print_decimal(&mut self, val: u8) -> Result<(), CpuError> {
        writeln!(self.console, "{}", val)?;
        Ok(())
    }

    pub(crate) fn print_char(&mut self, val: u8) -> Result<(), CpuError> {
        write!(self.console, "{}", val as char)?;
        self.console.flush()?;
        Ok(())
    }

    ///
    /// Run one ALU-dispatched instruction: read the operand registers,
    /// apply the operation, and write back either the masked result or
    /// the new flags value.
    ///
    pub(crate) fn alu(&mut self, op: AluOp, inst: &Ls8Inst) -> Result<(), CpuError> {
        let a = self.reg_read(inst.operand_a)?;
        let b = if op.takes_operand_b() {
            self.reg_read(inst.operand_b)?
        } else {
            0
        };
        match alu::apply(op, a, b, inst.pc)? {
            AluOutput::Value(v) => self.reg_write(inst.operand_a, v),
            AluOutput::Flags(f) => {
                self.fl = f;
                Ok(())
            }
        }
    }

    ///
    /// Conditional jump helper. The operand register is validated even
    /// when the condition does not hold; a false condition falls through
    /// to the next instruction.
    ///
    pub(crate) fn branch_if(&mut self, inst: &Ls8Inst, cond: bool) -> Result<(), CpuError> {
        let target = self.reg_read(inst.operand_a)?;
        if cond {
            self.update_pc(target)
        } else {
            self.update_pc(self.pc.wrapping_add(1))
        }
    }

    ///
    /// Fetch the opcode at PC and decode it: resolve the mnemonic, pull
    /// the operand bytes the encoding asks for, and advance PC past
    /// them. PC is left on the last byte of the instruction; the run
    /// loop adds the final increment for instructions that do not set
    /// the PC themselves.
    ///
    fn fetch_decode(&mut self) -> Result<Ls8Inst, CpuError> {
        let pc = self.pc;
        let opcode = self.ram.read(pc as usize)?;
        let mnem = match decode(opcode) {
            Some(m) => m,
            None => return Err(CpuError::UnknownOpcode { opcode, pc }),
        };

        let count = opcode >> fields::OPERAND_COUNT_SHIFT;
        let operand_a = if count >= 1 {
            self.ram.read(pc.wrapping_add(1) as usize)?
        } else {
            0
        };
        let operand_b = if count >= 2 {
            self.ram.read(pc.wrapping_add(2) as usize)?
        } else {
            0
        };
        if count > 0 {
            self.update_pc(pc.wrapping_add(count))?;
        }

        Ok(Ls8Inst {
            pc,
            opcode,
            mnem,
            operand_a,
            operand_b,
        })
    }

    pub fn execute(&mut self, inst: &Ls8Inst) -> Result<(), CpuError> {
        match inst.mnem {
            Ls8Mnem::ADD => self.add(inst),
            Ls8Mnem::AND => self.and(inst),
            Ls8Mnem::CALL => self.call(inst),
            Ls8Mnem::CMP => self.cmp(inst),
            Ls8Mnem::DEC => self.dec(inst),
            Ls8Mnem::DIV => self.div(inst),
            Ls8Mnem::HLT => self.hlt(inst),
            Ls8Mnem::INC => self.inc(inst),
            Ls8Mnem::INT => self.int(inst),
            Ls8Mnem::IRET => self.iret(inst),
            Ls8Mnem::JEQ => self.jeq(inst),
            Ls8Mnem::JGE => self.jge(inst),
            Ls8Mnem::JGT => self.jgt(inst),
            Ls8Mnem::JLE => self.jle(inst),
            Ls8Mnem::JLT => self.jlt(inst),
            Ls8Mnem::JMP => self.jmp(inst),
            Ls8Mnem::JNE => self.jne(inst),
            Ls8Mnem::LD => self.ld(inst),
            Ls8Mnem::LDI => self.ldi(inst),
            Ls8Mnem::MOD => self.modulo(inst),
            Ls8Mnem::MUL => self.mul(inst),
            Ls8Mnem::NOP => self.nop(inst),
            Ls8Mnem::NOT => self.not(inst),
            Ls8Mnem::OR => self.or(inst),
            Ls8Mnem::POP => self.pop(inst),
            Ls8Mnem::PRA => self.pra(inst),
            Ls8Mnem::PRN => self.prn(inst),
            Ls8Mnem::PUSH => self.push(inst),
            Ls8Mnem::RET => self.ret(inst),
            Ls8Mnem::SHL => self.shl(inst),
            Ls8Mnem::SHR => self.shr(inst),
            Ls8Mnem::ST => self.st(inst),
            Ls8Mnem::SUB => self.sub(inst),
            Ls8Mnem::XOR => self.xor(inst),
        }
    }

    /// Interrupt lines that are both raised and unmasked.
    fn rupt_pending(&self) -> u8 {
        self.reg[REG_IM] & self.reg[REG_IS]
    }

    ///
    /// Dispatch the highest-priority pending interrupt (lowest line
    /// number first). Saves the interrupt mask, disables further
    /// interrupts, clears the fired bit, pushes the return context and
    /// jumps through the vector table. IRET unwinds all of it.
    ///
    fn handle_rupt(&mut self) -> Result<(), CpuError> {
        let pending = self.rupt_pending();
        for line in 0..NUM_IRQ_LINES {
            let mask = 1u8 << line;
            if pending & mask == 0 {
                continue;
            }
            debug!(
                "IRQ {} firing (IM 0x{:02x} IS 0x{:02x})",
                line, self.reg[REG_IM], self.reg[REG_IS]
            );

            self.im_stack.push(self.reg[REG_IM]);
            self.reg[REG_IM] = 0;
            self.reg[REG_IS] &= !mask;

            // Save the return context: resume address, flags, R0-R6.
            self.stack_push(self.pc.wrapping_add(1))?;
            self.stack_push(self.fl)?;
            for i in 0..=REG_IS {
                self.stack_push(self.reg[i])?;
            }

            let vector = self.ram.read(VECTOR_BASE as usize + line)?;
            self.update_pc(vector)?;
            break;
        }
        Ok(())
    }

    ///
    /// One machine cycle: dispatch a pending interrupt if there is one
    /// (and do nothing else this cycle), otherwise fetch, decode,
    /// execute, and advance the PC unless the instruction set it.
    ///
    pub fn step(&mut self) -> Result<(), CpuError> {
        if self.rupt_pending() != 0 {
            return self.handle_rupt();
        }

        let inst = self.fetch_decode()?;
        self.ir = inst.opcode;
        trace!(
            "PC 0x{:02x} | IR 0b{:08b} {:?} | regs {:02x?} | fl 0b{:03b}",
            inst.pc,
            inst.opcode,
            inst.mnem,
            self.reg,
            self.fl
        );

        self.execute(&inst)?;

        if !inst.sets_pc() {
            self.update_pc(self.pc.wrapping_add(1))?;
        }
        Ok(())
    }

    ///
    /// Run until the machine halts. Divide-by-zero is the one
    /// recoverable fault: it is reported against the faulting
    /// instruction and the machine halts cleanly with every register
    /// intact. Any other error is an invariant violation and is handed
    /// back to the caller.
    ///
    pub fn run(&mut self) -> Result<(), CpuError> {
        self.state = CpuState::Running;
        while self.state == CpuState::Running {
            match self.step() {
                Ok(()) => {}
                Err(e @ CpuError::DivideByZero { .. }) => {
                    error!("{}", e);
                    self.state = CpuState::Halted;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
