//! # VOXIR Specification
//!
//! Instruction set for the VOXIR scene evaluator: a register machine that
//! re-runs one short program per sample point of a voxel volume.
//!
//! ## Key Features
//! - Variable-length instructions: one opcode word plus its operand words
//! - Unbounded, monotonically numbered register file (no reuse)
//! - Three implicit-surface primitives (sphere, box, heart)
//! - Boolean set operators (complement, intersect, union)
//! - Loop/draw/jump control framing for the per-sample evaluator
//!
//! The compiler that produces these programs lives in `voxir-compiler`.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod table;
pub mod writer;

pub use error::VoxirError;
pub use instruction::{decode, Instruction};
pub use opcode::{Opcode, OpcodeFamily};
pub use program::{Program, ProgramHeader};
pub use table::{OpTable, PrimitiveRow};
pub use writer::{InstructionSink, StreamWriter};

/// Magic number for VOXIR files: "VXIR" = 0x56584952
pub const MAGIC: u32 = 0x5658_4952;

/// Version: v1.0 = 0x00010000
pub const VERSION: u32 = 0x0001_0000;

/// Loop-instruction sentinel: no prior instruction address to return to.
pub const LOOP_SENTINEL: u32 = u32::MAX;

/// Instruction stream word (opcodes and operands share one width)
pub type Word = u32;

/// Register number in the evaluator's per-sample working set
pub type Reg = u32;
