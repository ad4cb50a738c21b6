//! # VOXIR Instruction Stream
//!
//! An instruction is one opcode word followed by its operand words, packed
//! back to back with no framing. This module provides the structured form,
//! flattening to words, and decoding a word stream back into structure.

use crate::error::VoxirError;
use crate::opcode::Opcode;
use crate::{Word, LOOP_SENTINEL};
use serde::{Deserialize, Serialize};

/// One decoded instruction: opcode plus positional operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<Word>,
}

impl Instruction {
    pub fn new(opcode: Opcode, operands: Vec<Word>) -> Self {
        Self { opcode, operands }
    }

    /// Instruction mnemonic
    pub fn mnemonic(&self) -> &'static str {
        self.opcode.mnemonic()
    }

    /// Total width in words (opcode word + operands)
    pub fn len_words(&self) -> usize {
        1 + self.operands.len()
    }

    /// Flatten to the wire form: opcode word, then operands in order.
    pub fn words(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.len_words());
        words.push(self.opcode.to_u8() as Word);
        words.extend_from_slice(&self.operands);
        words
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ops = &self.operands;
        match self.opcode {
            // Primitives: destination register, then raw arguments
            Opcode::Sphere | Opcode::Box | Opcode::Heart => {
                write!(f, "{} r{}", self.mnemonic(), ops[0])?;
                for arg in &ops[1..] {
                    write!(f, ", {}", arg)?;
                }
                Ok(())
            }

            Opcode::Not => write!(f, "not r{}, r{}", ops[0], ops[1]),

            Opcode::And | Opcode::Or => {
                write!(f, "{} r{}, r{}, r{}", self.mnemonic(), ops[0], ops[1], ops[2])
            }

            Opcode::Loop => {
                if ops[0] == LOOP_SENTINEL {
                    write!(f, "loop -")?;
                } else {
                    write!(f, "loop {}", ops[0])?;
                }
                for bound in &ops[1..] {
                    write!(f, ", {}", bound)?;
                }
                Ok(())
            }

            Opcode::Draw => write!(f, "draw r{}", ops[0]),
            Opcode::Jump => write!(f, "jump {}", ops[0]),
        }
    }
}

/// Decode a flat word stream into structured instructions.
///
/// Each opcode carries a fixed operand count, so decoding is a single
/// forward walk. Fails on an unknown opcode word or a stream that ends in
/// the middle of an instruction.
pub fn decode(words: &[Word]) -> Result<Vec<Instruction>, VoxirError> {
    let mut instructions = Vec::new();
    let mut pos = 0;

    while pos < words.len() {
        let word = words[pos];
        let opcode = u8::try_from(word)
            .ok()
            .and_then(Opcode::from_u8)
            .ok_or(VoxirError::InvalidOpcode(word))?;

        let count = opcode.operand_count();
        let end = pos + 1 + count;
        if end > words.len() {
            return Err(VoxirError::TruncatedInstruction {
                mnemonic: opcode.mnemonic(),
                expected: count,
                found: words.len() - pos - 1,
            });
        }

        instructions.push(Instruction::new(opcode, words[pos + 1..end].to_vec()));
        pos = end;
    }

    Ok(instructions)
}
