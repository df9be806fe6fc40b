use crate::machine::errors::VmError;
use crate::machine::isa::Opcode;

/// Number of registers in the file.
pub const REGISTER_COUNT: usize = 16;

/// Runtime value stored in a register.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Signed integer contents.
    Integer(i64),
    /// Text contents.
    String(String),
}

impl Value {
    /// Returns the type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
        }
    }
}

/// Register file holding the sixteen typed cells.
///
/// Indices are masked to the file size, so any operand byte selects a valid
/// register. After a reset every cell holds `Integer(0)`.
pub(super) struct Registers {
    regs: [Value; REGISTER_COUNT],
}

impl Registers {
    pub(super) fn new() -> Self {
        Self {
            regs: std::array::from_fn(|_| Value::Integer(0)),
        }
    }

    /// Sets every register back to `Integer(0)`.
    pub(super) fn reset(&mut self) {
        self.regs.fill(Value::Integer(0));
    }

    /// Returns the value in register `idx`.
    pub(super) fn get(&self, idx: u8) -> &Value {
        &self.regs[idx as usize % REGISTER_COUNT]
    }

    /// Returns the integer in register `idx`.
    ///
    /// Returns [`VmError::TypeMismatch`] if the register holds a string.
    pub(super) fn get_int(&self, idx: u8, op: Opcode) -> Result<i64, VmError> {
        match self.get(idx) {
            Value::Integer(v) => Ok(*v),
            other => Err(VmError::TypeMismatch {
                instruction: op.mnemonic(),
                register: idx,
                expected: "integer",
                actual: other.type_name(),
            }),
        }
    }

    /// Returns the string in register `idx`.
    ///
    /// Returns [`VmError::TypeMismatch`] if the register holds an integer.
    pub(super) fn get_str(&self, idx: u8, op: Opcode) -> Result<&str, VmError> {
        match self.get(idx) {
            Value::String(v) => Ok(v),
            other => Err(VmError::TypeMismatch {
                instruction: op.mnemonic(),
                register: idx,
                expected: "string",
                actual: other.type_name(),
            }),
        }
    }

    /// Stores a value into register `idx`.
    pub(super) fn set(&mut self, idx: u8, v: Value) {
        self.regs[idx as usize % REGISTER_COUNT] = v;
    }

    /// Iterates the registers in index order.
    pub(super) fn iter(&self) -> impl Iterator<Item = &Value> {
        self.regs.iter()
    }
}
