pub mod alu;
pub mod consts;
pub mod cpu;
pub mod err;
pub mod instr;
pub mod loader;
pub mod mem;
