use crate::consts::cpu::STACK_BASE;
use crate::err::CpuError;

///
/// Parse the textual program image format: each line whose first eight
/// characters are all `0`/`1` contributes one instruction byte, in file
/// order; anything after those eight characters, and every other line,
/// is ignored. A program whose byte count reaches the stack base cannot
/// be loaded.
///
pub fn parse_image(src: &str) -> Result<Vec<u8>, CpuError> {
    let mut image = Vec::new();
    for line in src.lines() {
        let bytes = line.as_bytes();
        if bytes.len() < 8 {
            continue;
        }
        if !bytes[..8].iter().all(|c| *c == b'0' || *c == b'1') {
            continue;
        }
        let byte = bytes[..8].iter().fold(0u8, |acc, c| (acc << 1) | (*c - b'0'));
        image.push(byte);
    }
    if image.len() >= STACK_BASE as usize {
        return Err(CpuError::ProgramTooLarge { len: image.len() });
    }
    Ok(image)
}
