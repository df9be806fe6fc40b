use tinyvm_derive::Error;

/// Errors that can occur while loading or executing a program.
///
/// Every variant is a fatal trap: the machine stops and the driver reports
/// the message on standard output before exiting with [`exit_code`].
///
/// [`exit_code`]: VmError::exit_code
#[derive(Debug, Error)]
pub enum VmError {
    /// Opcode byte with no handler. The IP is the offset of the opcode itself.
    #[error("Unrecognized/Unimplemented opcode {opcode:02X} at IP {ip:04X}")]
    UnknownOpcode { opcode: u8, ip: usize },
    /// A typed register read found the other variant.
    #[error("instruction {instruction} expected register r{register} to hold {expected} but found {actual}")]
    TypeMismatch {
        instruction: &'static str,
        register: u8,
        expected: &'static str,
        actual: &'static str,
    },
    /// DIV with a zero divisor.
    #[error("attempted to divide by zero")]
    DivisionByZero,
    /// STRING_TOINT on text that is not a decimal integer.
    #[error("failed to convert '{text}' to int: {reason}")]
    ParseInt { text: String, reason: String },
    /// POP or RET with nothing on the stack.
    #[error("stack underflow")]
    StackUnderflow,
    /// Program image does not fit in the memory image.
    #[error("program too large for RAM: {size} bytes")]
    ProgramTooLarge { size: usize },
    /// Program file could not be read.
    #[error("failed to read file: {path} - {reason}")]
    Io { path: String, reason: String },
    /// An operand read ran past the end of memory.
    #[error("unexpected end of memory while decoding at IP {ip:04X}")]
    UnexpectedEnd { ip: usize },
    /// PEEK or POKE with an address outside the memory image.
    #[error("memory access out of bounds: address {address}")]
    OutOfBounds { address: i64 },
}

impl VmError {
    /// Process exit status for this trap.
    ///
    /// Type errors, division by zero, and integer-parse failures exit with 3;
    /// every other trap exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            VmError::TypeMismatch { .. } | VmError::DivisionByZero | VmError::ParseInt { .. } => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_split_by_class() {
        assert_eq!(
            VmError::TypeMismatch {
                instruction: "INT_PRINT",
                register: 0,
                expected: "integer",
                actual: "string",
            }
            .exit_code(),
            3
        );
        assert_eq!(VmError::DivisionByZero.exit_code(), 3);
        assert_eq!(
            VmError::ParseInt {
                text: "abc".into(),
                reason: "invalid digit".into(),
            }
            .exit_code(),
            3
        );
        assert_eq!(VmError::StackUnderflow.exit_code(), 1);
        assert_eq!(VmError::UnknownOpcode { opcode: 0xFF, ip: 0 }.exit_code(), 1);
        assert_eq!(VmError::ProgramTooLarge { size: 70_000 }.exit_code(), 1);
    }

    #[test]
    fn unknown_opcode_message_format() {
        let err = VmError::UnknownOpcode {
            opcode: 0xAB,
            ip: 0x0102,
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized/Unimplemented opcode AB at IP 0102"
        );
    }
}
