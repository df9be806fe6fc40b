//! Instruction Set Architecture (ISA) definitions.
//!
//! The [`for_each_opcode!`](crate::for_each_opcode) macro holds the canonical
//! opcode list and invokes a callback macro for code generation, so the
//! dispatch loop can generate its decode glue without duplicating the
//! definitions.
//!
//! This module generates:
//! - The [`Opcode`] enum with byte mappings
//! - `TryFrom<u8>` for decoding opcode bytes
//! - `mnemonic()` for diagnostics and tracing
//!
//! # Bytecode Format
//!
//! Instructions use variable-length encoding:
//! - Opcode: 1 byte
//! - Register operand: 1 byte (low 4 bits used)
//! - Immediate: 2 bytes (little-endian, unsigned)
//! - Inline string: 2-byte little-endian length followed by that many raw
//!   bytes (no terminator, no padding)

use crate::machine::errors::VmError;

/// Invokes a callback macro with the complete opcode definition list.
///
/// Each row is `Name = byte, "MNEMONIC" => [operand: Kind, ...]` where the
/// kinds are `Reg` (one register byte), `Imm16` (little-endian 16-bit
/// immediate), and `Str` (length-prefixed inline string).
#[macro_export]
macro_rules! for_each_opcode {
    ($callback:ident) => {
        $callback! {
            // =========================
            // Control
            // =========================
            /// EXIT ; halt the dispatch loop
            Exit = 0x00, "EXIT" => [],
            // =========================
            // Integer operations
            // =========================
            /// INT_STORE reg, imm ; reg = imm
            IntStore = 0x01, "INT_STORE" => [reg: Reg, value: Imm16],
            /// INT_PRINT reg ; print reg as a decimal integer
            IntPrint = 0x02, "INT_PRINT" => [reg: Reg],
            /// INT_TOSTRING reg ; reg = decimal string of reg
            IntToString = 0x03, "INT_TOSTRING" => [reg: Reg],
            /// INT_RANDOM reg ; reg = host random in [0, 0xFFFF)
            IntRandom = 0x04, "INT_RANDOM" => [reg: Reg],
            // =========================
            // Jumps
            // =========================
            /// JUMP addr ; ip = addr
            Jump = 0x10, "JUMP" => [addr: Imm16],
            /// JUMP_Z addr ; ip = addr when the zero-flag is set
            JumpZ = 0x11, "JUMP_Z" => [addr: Imm16],
            /// JUMP_NZ addr ; ip = addr when the zero-flag is clear
            JumpNz = 0x12, "JUMP_NZ" => [addr: Imm16],
            // =========================
            // Arithmetic / bitwise
            // =========================
            /// XOR dst, a, b ; dst = a ^ b
            Xor = 0x20, "XOR" => [dst: Reg, a: Reg, b: Reg],
            /// ADD dst, a, b ; dst = a + b
            Add = 0x21, "ADD" => [dst: Reg, a: Reg, b: Reg],
            /// SUB dst, a, b ; dst = a - b, sets the zero-flag when dst <= 0
            Sub = 0x22, "SUB" => [dst: Reg, a: Reg, b: Reg],
            /// MUL dst, a, b ; dst = a * b
            Mul = 0x23, "MUL" => [dst: Reg, a: Reg, b: Reg],
            /// DIV dst, a, b ; dst = a / b (trap on division by zero)
            Div = 0x24, "DIV" => [dst: Reg, a: Reg, b: Reg],
            /// INC reg ; reg = reg + 1
            Inc = 0x25, "INC" => [reg: Reg],
            /// DEC reg ; reg = reg - 1
            Dec = 0x26, "DEC" => [reg: Reg],
            /// AND dst, a, b ; dst = a & b
            And = 0x27, "AND" => [dst: Reg, a: Reg, b: Reg],
            /// OR dst, a, b ; dst = a | b
            Or = 0x28, "OR" => [dst: Reg, a: Reg, b: Reg],
            // =========================
            // String operations
            // =========================
            /// STORE_STRING reg, str ; reg = str
            StoreString = 0x30, "STORE_STRING" => [reg: Reg, text: Str],
            /// PRINT_STRING reg ; print reg verbatim
            PrintString = 0x31, "PRINT_STRING" => [reg: Reg],
            /// STRING_CONCAT dst, a, b ; dst = a followed by b
            StringConcat = 0x32, "STRING_CONCAT" => [dst: Reg, a: Reg, b: Reg],
            /// SYSTEM reg ; run the command held in reg via the host bridge
            System = 0x33, "SYSTEM" => [reg: Reg],
            /// STRING_TOINT reg ; parse the decimal string in reg
            StringToInt = 0x34, "STRING_TOINT" => [reg: Reg],
            // =========================
            // Comparisons
            // =========================
            /// CMP_REG a, b ; zero-flag = same type and equal values
            CmpReg = 0x40, "CMP_REG" => [a: Reg, b: Reg],
            /// CMP_IMMEDIATE reg, imm ; zero-flag = reg holds the integer imm
            CmpImmediate = 0x41, "CMP_IMMEDIATE" => [reg: Reg, value: Imm16],
            /// CMP_STR reg, str ; zero-flag = reg holds exactly str
            CmpStr = 0x42, "CMP_STR" => [reg: Reg, text: Str],
            /// IS_STRING reg ; zero-flag = reg holds a string
            IsString = 0x43, "IS_STRING" => [reg: Reg],
            /// IS_INT reg ; zero-flag = reg holds an integer
            IsInt = 0x44, "IS_INT" => [reg: Reg],
            // =========================
            // Misc
            // =========================
            /// NOP ; no effect
            Nop = 0x50, "NOP" => [],
            /// STORE dst, src ; copies dst into src (note the direction)
            Store = 0x51, "STORE" => [dst: Reg, src: Reg],
            // =========================
            // Memory
            // =========================
            /// PEEK res, src ; res = mem[src]
            Peek = 0x60, "PEEK" => [res: Reg, src: Reg],
            /// POKE src, dst ; mem[dst] = low byte of src
            Poke = 0x61, "POKE" => [src: Reg, dst: Reg],
            /// MEMCPY dst, src, len ; copy len bytes from address src to dst
            Memcpy = 0x62, "MEMCPY" => [dst: Reg, src: Reg, len: Reg],
            // =========================
            // Stack
            // =========================
            /// PUSH reg ; push reg's integer onto the stack
            Push = 0x70, "PUSH" => [reg: Reg],
            /// POP reg ; reg = popped integer
            Pop = 0x71, "POP" => [reg: Reg],
            /// RET ; ip = popped integer
            Ret = 0x72, "RET" => [],
            /// CALL addr ; push ip, then ip = addr
            Call = 0x73, "CALL" => [addr: Imm16],
        }
    };
}

macro_rules! define_opcodes {
    (
        $(
            $(#[$doc:meta])*
            $name:ident = $byte:literal, $mnemonic:literal => [
                $( $field:ident : $kind:ident ),* $(,)?
            ]
        ),* $(,)?
    ) => {
        /// One decoded opcode byte.
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub enum Opcode {
            $(
                $(#[$doc])*
                $name = $byte,
            )*
        }

        impl TryFrom<u8> for Opcode {
            type Error = VmError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $byte => Ok(Opcode::$name), )*
                    _ => Err(VmError::UnknownOpcode {
                        opcode: value,
                        ip: 0,
                    }),
                }
            }
        }

        impl Opcode {
            /// Returns the assembly mnemonic for this opcode.
            pub const fn mnemonic(&self) -> &'static str {
                match self {
                    $( Opcode::$name => $mnemonic, )*
                }
            }
        }
    };
}

for_each_opcode!(define_opcodes);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_try_from_invalid() {
        assert!(matches!(
            Opcode::try_from(0xFF),
            Err(VmError::UnknownOpcode { opcode: 0xFF, .. })
        ));
    }

    #[test]
    fn opcode_try_from_round_trips() {
        for byte in [0x00, 0x01, 0x12, 0x28, 0x34, 0x44, 0x51, 0x62, 0x73] {
            let op = Opcode::try_from(byte).unwrap();
            assert_eq!(op as u8, byte);
        }
    }

    #[test]
    fn mnemonics_match_the_wire_names() {
        assert_eq!(Opcode::IntStore.mnemonic(), "INT_STORE");
        assert_eq!(Opcode::JumpNz.mnemonic(), "JUMP_NZ");
        assert_eq!(Opcode::StringToInt.mnemonic(), "STRING_TOINT");
        assert_eq!(Opcode::Memcpy.mnemonic(), "MEMCPY");
    }
}
