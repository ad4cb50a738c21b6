//! # Error Types for VOXIR

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoxirError {
    // Program format errors
    #[error("Invalid program magic: expected 0x56584952, got {0:#010x}")]
    InvalidMagic(u32),

    #[error("Invalid program version: expected {expected:#010x}, found {found:#010x}")]
    InvalidVersion { expected: u32, found: u32 },

    #[error("Invalid header size: expected {expected} bytes, found {found} bytes")]
    InvalidHeaderSize { expected: usize, found: usize },

    #[error("Invalid code size: expected {expected} bytes, found {found} bytes")]
    InvalidCodeSize { expected: usize, found: usize },

    // Instruction errors
    #[error("Invalid opcode word: {0:#010x}")]
    InvalidOpcode(u32),

    #[error("Truncated {mnemonic} instruction: expected {expected} operand words, found {found}")]
    TruncatedInstruction {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },
}
