extern crate clap;

use log::error;

use std::fs;
use std::io;

use rls8_core::cpu::Ls8Cpu;
use rls8_core::loader;

fn fetch_config<'a>() -> clap::ArgMatches<'a> {
    let about = "RLS8 is an LS-8 microcomputer emulator written entirely in Rust";
    let c = clap::App::new("Rust LS-8 (RLS8)")
        .version("0.1")
        .about(about)
        .arg(
            clap::Arg::with_name("filename")
                .index(1)
                .help("Program image (.ls8) to load and run"),
        );
    let a = c.get_matches();
    a
}

fn main() {
    env_logger::init();

    let matches = fetch_config();
    let filename = match matches.value_of("filename") {
        Some(f) => f,
        None => {
            eprintln!("usage: rls8 <program.ls8>");
            return;
        }
    };

    let src = match fs::read_to_string(filename) {
        Ok(s) => s,
        Err(e) => {
            error!("Unable to open file {:?}: {}", filename, e);
            eprintln!("usage: rls8 <program.ls8>");
            return;
        }
    };

    let image = match loader::parse_image(&src) {
        Ok(i) => i,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout();
    let mut cpu = Ls8Cpu::new(&mut stdout);
    if let Err(e) = cpu.load_image(&image) {
        error!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = cpu.run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
