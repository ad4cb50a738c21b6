//! # Instruction Writers
//!
//! The compiler hands finished instructions to an [`InstructionSink`] one at
//! a time: the opcode, then its operands, in order. That append-only contract
//! is all code generation requires; what the sink does with the stream
//! (buffer it, encode it, ship it) is its own concern.

use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::program::Program;
use crate::Word;

/// Append-only destination for an instruction stream.
pub trait InstructionSink {
    /// Append one complete instruction: opcode, then operands in order.
    fn append(&mut self, opcode: Opcode, operands: &[Word]);
}

/// The standard sink: buffers structured instructions in memory.
#[derive(Debug, Clone, Default)]
pub struct StreamWriter {
    instructions: Vec<Instruction>,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instructions appended so far, in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Flatten the buffered stream to wire words.
    pub fn words(&self) -> Vec<Word> {
        self.instructions
            .iter()
            .flat_map(|inst| inst.words())
            .collect()
    }

    /// Package the buffered stream as a program with the given extent.
    pub fn into_program(self, extent: u32) -> Program {
        Program::new(self.words(), extent)
    }
}

impl InstructionSink for StreamWriter {
    fn append(&mut self, opcode: Opcode, operands: &[Word]) {
        self.instructions
            .push(Instruction::new(opcode, operands.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut writer = StreamWriter::new();
        writer.append(Opcode::Sphere, &[0, 0, 0, 0, 5, 0]);
        writer.append(Opcode::Draw, &[0]);

        assert_eq!(writer.len(), 2);
        assert_eq!(writer.instructions()[0].opcode, Opcode::Sphere);
        assert_eq!(writer.instructions()[1].opcode, Opcode::Draw);
    }

    #[test]
    fn test_words_concatenate() {
        let mut writer = StreamWriter::new();
        writer.append(Opcode::Not, &[1, 0]);
        writer.append(Opcode::Jump, &[0]);

        assert_eq!(writer.words(), vec![0x10, 1, 0, 0x22, 0]);
    }

    #[test]
    fn test_into_program() {
        let mut writer = StreamWriter::new();
        writer.append(Opcode::Draw, &[0]);

        let program = writer.into_program(7);
        assert_eq!(program.header.extent, 7);
        assert_eq!(program.code, vec![0x21, 0]);
    }
}
