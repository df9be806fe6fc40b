//! A bytecode interpreter for a small register-based virtual machine.
//!
//! Provides the CPU state machine, the instruction set, and the host bridge
//! through which programs reach the surrounding process.

pub mod machine;
pub mod utils;
