//! # Program Container
//!
//! Binary format for a compiled scene: a small header followed by the raw
//! instruction stream as little-endian words.
//!
//! Binary layout:
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────────
//! 0x00    4     magic ("VXIR")
//! 0x04    4     version
//! 0x08    4     extent (bounding cube side length)
//! 0x0C    4     code_size (bytes)
//! 0x10    ...   code (little-endian words)
//! ```

use crate::error::VoxirError;
use crate::instruction::{decode, Instruction};
use crate::{Word, MAGIC, VERSION};
use std::fmt;

/// Program header (16 bytes)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramHeader {
    /// Magic number: "VXIR" = 0x56584952
    pub magic: u32,

    /// Format version
    pub version: u32,

    /// Side length of the bounding cube the evaluator iterates
    pub extent: u32,

    /// Code section size in bytes
    pub code_size: u32,
}

impl ProgramHeader {
    /// Header size in bytes
    pub const SIZE: usize = 16;

    pub fn new(extent: u32, code_size: u32) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            extent,
            code_size,
        }
    }

    /// Validate the header
    pub fn validate(&self) -> Result<(), VoxirError> {
        if self.magic != MAGIC {
            return Err(VoxirError::InvalidMagic(self.magic));
        }

        if self.version != VERSION {
            return Err(VoxirError::InvalidVersion {
                expected: VERSION,
                found: self.version,
            });
        }

        Ok(())
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];

        bytes[0..4].copy_from_slice(&self.magic.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.extent.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.code_size.to_le_bytes());

        bytes
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VoxirError> {
        if bytes.len() < Self::SIZE {
            return Err(VoxirError::InvalidHeaderSize {
                expected: Self::SIZE,
                found: bytes.len(),
            });
        }

        let header = Self {
            magic: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            version: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            extent: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            code_size: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        };

        header.validate()?;
        Ok(header)
    }
}

impl fmt::Display for ProgramHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VOXIR Program Header")?;
        writeln!(f, "  Magic:     {:#010x}", self.magic)?;
        writeln!(f, "  Version:   {:#010x}", self.version)?;
        writeln!(f, "  Extent:    {}", self.extent)?;
        writeln!(f, "  Code size: {} bytes", self.code_size)?;
        Ok(())
    }
}

/// Complete program: header plus instruction stream words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub header: ProgramHeader,

    /// Instruction stream (opcode and operand words, back to back)
    pub code: Vec<Word>,
}

impl Program {
    pub fn new(code: Vec<Word>, extent: u32) -> Self {
        let code_size = (code.len() * 4) as u32;
        Self {
            header: ProgramHeader::new(extent, code_size),
            code,
        }
    }

    /// Validate header fields and the header/code size agreement.
    pub fn validate(&self) -> Result<(), VoxirError> {
        self.header.validate()?;

        if self.code.len() * 4 != self.header.code_size as usize {
            return Err(VoxirError::InvalidCodeSize {
                expected: self.header.code_size as usize,
                found: self.code.len() * 4,
            });
        }

        Ok(())
    }

    /// Re-structure the code words into instructions.
    pub fn instructions(&self) -> Result<Vec<Instruction>, VoxirError> {
        decode(&self.code)
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(ProgramHeader::SIZE + self.code.len() * 4);

        bytes.extend_from_slice(&self.header.to_bytes());
        for &word in &self.code {
            bytes.extend_from_slice(&word.to_le_bytes());
        }

        bytes
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VoxirError> {
        let header = ProgramHeader::from_bytes(bytes)?;

        let code_start = ProgramHeader::SIZE;
        let code_end = code_start + header.code_size as usize;

        if bytes.len() < code_end {
            return Err(VoxirError::InvalidCodeSize {
                expected: header.code_size as usize,
                found: bytes.len().saturating_sub(code_start),
            });
        }

        let mut code = Vec::with_capacity(header.code_size as usize / 4);
        for chunk in bytes[code_start..code_end].chunks_exact(4) {
            code.push(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        let program = Self { header, code };
        program.validate()?;
        Ok(program)
    }
}
