use crate::cpu::Ls8Cpu;

pub fn init_cpu(console: &mut Vec<u8>) -> Ls8Cpu<'_> {
    Ls8Cpu::new(console)
}

pub fn load_cpu<'a>(console: &'a mut Vec<u8>, image: &[u8]) -> Ls8Cpu<'a> {
    let mut cpu = Ls8Cpu::new(console);
    cpu.load_image(image).unwrap();
    cpu
}

mod intrpt;
