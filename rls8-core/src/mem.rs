use log::trace;

use crate::consts::MEM_SIZE;
use crate::err::CpuError;

///
/// Flat 256-byte memory image shared by program text, data, the stack
/// and the interrupt vector table. All access goes through `read` and
/// `write`, which validate the address; an out-of-range address here
/// means a decoder or register-index bug, not bad program input, since
/// every computed address is already byte-masked.
///
#[derive(Clone)]
pub struct Ls8Ram {
    bytes: [u8; MEM_SIZE],
}

impl Ls8Ram {
    pub fn new() -> Ls8Ram {
        Ls8Ram {
            bytes: [0; MEM_SIZE],
        }
    }

    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.bytes = [0; MEM_SIZE];
    }

    pub fn read(&self, addr: usize) -> Result<u8, CpuError> {
        if addr >= MEM_SIZE {
            return Err(CpuError::AddressOutOfRange { addr });
        }
        let val = self.bytes[addr];
        trace!("RAM Read: 0x{:02x}: 0x{:02x}", addr, val);
        Ok(val)
    }

    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), CpuError> {
        if addr >= MEM_SIZE {
            return Err(CpuError::AddressOutOfRange { addr });
        }
        trace!("RAM Write: 0x{:02x}: 0x{:02x}", addr, val);
        self.bytes[addr] = val;
        Ok(())
    }
}

impl Default for Ls8Ram {
    fn default() -> Self {
        Ls8Ram::new()
    }
}
