//! # VOXIR Opcode Definitions
//!
//! This module defines the opcode values for all VOXIR instructions.
//!
//! ## Opcode Encoding
//!
//! Opcodes are organized by family:
//! - 0x00-0x02: Primitives (SPHERE, BOX, HEART)
//! - 0x10-0x12: Set operators (NOT, AND, OR)
//! - 0x20-0x22: Control (LOOP, DRAW, JUMP)
//!
//! Every instruction is one opcode word followed by a fixed number of operand
//! words (see [`Opcode::operand_count`]). Primitives write a distance test
//! result into their destination register; set operators combine result
//! registers; control instructions frame the per-sample evaluation loop.

use serde::{Deserialize, Serialize};

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== Primitives (0x00-0x02) ==========
    /// SPHERE: rd = sample inside sphere(cx, cy, cz, radius, shape)
    Sphere = 0x00,
    /// BOX: rd = sample inside box(cx, cy, cz, sx, sy, sz, shape)
    Box = 0x01,
    /// HEART: rd = sample inside heart(cx, cy, cz, size, shape)
    Heart = 0x02,

    // ========== Set operators (0x10-0x12) ==========
    /// NOT: rd = complement of rs
    Not = 0x10,
    /// AND: rd = intersection of rs1 and rs2
    And = 0x11,
    /// OR: rd = union of rs1 and rs2
    Or = 0x12,

    // ========== Control (0x20-0x22) ==========
    /// LOOP: iterate samples over the volume (sentinel, x0, y0, z0, x1, y1, z1)
    Loop = 0x20,
    /// DRAW: test the result register for the current sample
    Draw = 0x21,
    /// JUMP: transfer control to an instruction address
    Jump = 0x22,
}

impl Opcode {
    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            // Primitives
            0x00 => Some(Opcode::Sphere),
            0x01 => Some(Opcode::Box),
            0x02 => Some(Opcode::Heart),

            // Set operators
            0x10 => Some(Opcode::Not),
            0x11 => Some(Opcode::And),
            0x12 => Some(Opcode::Or),

            // Control
            0x20 => Some(Opcode::Loop),
            0x21 => Some(Opcode::Draw),
            0x22 => Some(Opcode::Jump),

            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Check if this is a primitive opcode
    #[inline]
    pub const fn is_primitive(self) -> bool {
        matches!(self, Opcode::Sphere | Opcode::Box | Opcode::Heart)
    }

    /// Check if this is a set-operator opcode
    #[inline]
    pub const fn is_set_op(self) -> bool {
        matches!(self, Opcode::Not | Opcode::And | Opcode::Or)
    }

    /// Check if this is a control opcode
    #[inline]
    pub const fn is_control(self) -> bool {
        matches!(self, Opcode::Loop | Opcode::Draw | Opcode::Jump)
    }

    /// Number of operand words following the opcode word.
    ///
    /// Primitives take a destination register plus their argument list;
    /// NOT takes destination and source; AND/OR take destination and two
    /// sources; LOOP takes a sentinel plus six volume bounds; DRAW a result
    /// register; JUMP a target address.
    #[inline]
    pub const fn operand_count(self) -> usize {
        match self {
            Opcode::Sphere => 6,
            Opcode::Box => 8,
            Opcode::Heart => 6,
            Opcode::Not => 2,
            Opcode::And => 3,
            Opcode::Or => 3,
            Opcode::Loop => 7,
            Opcode::Draw => 1,
            Opcode::Jump => 1,
        }
    }

    /// Get the opcode family
    #[inline]
    pub const fn family(self) -> OpcodeFamily {
        if self.is_primitive() {
            OpcodeFamily::Primitive
        } else if self.is_set_op() {
            OpcodeFamily::SetOp
        } else {
            OpcodeFamily::Control
        }
    }

    /// Instruction mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Sphere => "sphere",
            Opcode::Box => "box",
            Opcode::Heart => "heart",
            Opcode::Not => "not",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Loop => "loop",
            Opcode::Draw => "draw",
            Opcode::Jump => "jump",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// Opcode family
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpcodeFamily {
    /// Primitives: SPHERE, BOX, HEART
    Primitive = 0,
    /// Set operators: NOT, AND, OR
    SetOp = 1,
    /// Control: LOOP, DRAW, JUMP
    Control = 2,
}

impl std::fmt::Display for OpcodeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OpcodeFamily::Primitive => "primitive",
            OpcodeFamily::SetOp => "set-op",
            OpcodeFamily::Control => "control",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(Opcode::Sphere.to_u8(), 0x00);
        assert_eq!(Opcode::Heart.to_u8(), 0x02);
        assert_eq!(Opcode::Not.to_u8(), 0x10);
        assert_eq!(Opcode::Or.to_u8(), 0x12);
        assert_eq!(Opcode::Loop.to_u8(), 0x20);
        assert_eq!(Opcode::Jump.to_u8(), 0x22);
    }

    #[test]
    fn test_opcode_from_u8() {
        assert_eq!(Opcode::from_u8(0x00), Some(Opcode::Sphere));
        assert_eq!(Opcode::from_u8(0x11), Some(Opcode::And));
        assert_eq!(Opcode::from_u8(0x22), Some(Opcode::Jump));
        assert_eq!(Opcode::from_u8(0x03), None);
        assert_eq!(Opcode::from_u8(0xFF), None);
    }

    #[test]
    fn test_opcode_family() {
        assert_eq!(Opcode::Sphere.family(), OpcodeFamily::Primitive);
        assert_eq!(Opcode::Box.family(), OpcodeFamily::Primitive);
        assert_eq!(Opcode::Heart.family(), OpcodeFamily::Primitive);
        assert_eq!(Opcode::Not.family(), OpcodeFamily::SetOp);
        assert_eq!(Opcode::And.family(), OpcodeFamily::SetOp);
        assert_eq!(Opcode::Or.family(), OpcodeFamily::SetOp);
        assert_eq!(Opcode::Loop.family(), OpcodeFamily::Control);
        assert_eq!(Opcode::Draw.family(), OpcodeFamily::Control);
        assert_eq!(Opcode::Jump.family(), OpcodeFamily::Control);
    }

    #[test]
    fn test_operand_counts() {
        assert_eq!(Opcode::Sphere.operand_count(), 6);
        assert_eq!(Opcode::Box.operand_count(), 8);
        assert_eq!(Opcode::Heart.operand_count(), 6);
        assert_eq!(Opcode::Not.operand_count(), 2);
        assert_eq!(Opcode::And.operand_count(), 3);
        assert_eq!(Opcode::Or.operand_count(), 3);
        assert_eq!(Opcode::Loop.operand_count(), 7);
        assert_eq!(Opcode::Draw.operand_count(), 1);
        assert_eq!(Opcode::Jump.operand_count(), 1);
    }

    #[test]
    fn test_mnemonic_roundtrip() {
        for value in 0u8..=0xFF {
            if let Some(op) = Opcode::from_u8(value) {
                assert_eq!(op.to_u8(), value);
                assert_eq!(format!("{}", op), op.mnemonic());
            }
        }
    }
}
