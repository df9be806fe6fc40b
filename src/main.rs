//! Bytecode interpreter CLI.
//!
//! Loads each program file named on the command line into a fresh CPU and
//! runs it to completion or trap.
//!
//! # Usage
//! ```text
//! tinyvm file1.raw file2.raw .. fileN.raw
//! ```
//!
//! # Environment
//! - `DEBUG`: when set to a non-empty value, traces each executed opcode
//!   and dumps the registers after every successful run.
//!
//! # Exit codes
//! - `0` on EXIT
//! - `1` on load errors, unknown opcodes, stack underflow
//! - `3` on type mismatches, division by zero, string-to-int failures

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use tinyvm::machine::cpu::Cpu;
use tinyvm::machine::errors::VmError;
use tinyvm::utils::trace;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!(
            "Usage: {} file1.raw file2.raw .. fileN.raw",
            program_name(&args[0])
        );
        return;
    }

    for path in &args[1..] {
        println!("Loading file: {path}");
        if let Err(e) = run_file(path) {
            println!("{e}");
            process::exit(e.exit_code());
        }
    }
}

/// Loads and runs a single program image on a fresh CPU.
fn run_file(path: &str) -> Result<(), VmError> {
    let image = fs::read(path).map_err(|e| VmError::Io {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let mut cpu = Cpu::new();
    cpu.load(&image)?;
    cpu.run()?;

    if trace::enabled() {
        cpu.dump_registers();
    }
    Ok(())
}

/// Strips the directory from the invoking binary's path.
fn program_name(arg0: &str) -> &str {
    Path::new(arg0)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(arg0)
}
