//! # Primitive Operation Table
//!
//! The single point of truth for what a valid primitive call looks like:
//! which source-level names exist, which opcode each lowers to, how many
//! arguments it requires, and how it contributes to the scene's bounding
//! extent. Adding a primitive means adding one row to [`ROWS`].
//!
//! The table is an explicitly constructed value passed into validation and
//! code generation; there is no process-wide mutable registry.

use crate::opcode::Opcode;
use std::collections::HashMap;

/// One primitive's row: surface name, opcode, arity, and extent rule.
///
/// The first three arguments of every primitive are a corner/center
/// coordinate. `extent_offsets[i]` is the index of the size argument added to
/// coordinate `i` to produce that axis' reach; the additions wrap like the
/// evaluator's unsigned arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveRow {
    pub name: &'static str,
    pub opcode: Opcode,
    pub arity: usize,
    extent_offsets: [usize; 3],
}

impl PrimitiveRow {
    /// Candidate per-axis maxima of this primitive's reach.
    ///
    /// # Panics
    ///
    /// Indexes `args` by the row's extent offsets; calling this with fewer
    /// arguments than the row's arity is a programming error and panics.
    pub fn axis_maxima(&self, args: &[u32]) -> [u32; 3] {
        [
            args[0].wrapping_add(args[self.extent_offsets[0]]),
            args[1].wrapping_add(args[self.extent_offsets[1]]),
            args[2].wrapping_add(args[self.extent_offsets[2]]),
        ]
    }
}

/// The fixed primitive set.
///
/// The trailing argument of the 5-argument primitives is a shape parameter
/// passed through to the evaluator; it does not participate in the extent
/// rule.
const ROWS: &[PrimitiveRow] = &[
    PrimitiveRow {
        name: "sphere",
        opcode: Opcode::Sphere,
        arity: 5,
        extent_offsets: [3, 3, 3],
    },
    PrimitiveRow {
        name: "box",
        opcode: Opcode::Box,
        arity: 7,
        extent_offsets: [3, 4, 5],
    },
    PrimitiveRow {
        name: "heart",
        opcode: Opcode::Heart,
        arity: 5,
        extent_offsets: [3, 3, 3],
    },
];

/// Name → primitive dispatch table. Fixed after construction.
#[derive(Debug, Clone)]
pub struct OpTable {
    by_name: HashMap<&'static str, &'static PrimitiveRow>,
}

impl OpTable {
    /// The standard table covering every primitive the evaluator knows.
    pub fn standard() -> Self {
        Self {
            by_name: ROWS.iter().map(|row| (row.name, row)).collect(),
        }
    }

    /// Resolve a source-level name to its table row.
    pub fn find(&self, name: &str) -> Option<&PrimitiveRow> {
        self.by_name.get(name).copied()
    }

    /// Resolve a source-level name to its opcode.
    pub fn lookup(&self, name: &str) -> Option<Opcode> {
        self.find(name).map(|row| row.opcode)
    }

    /// Required argument count for a primitive opcode.
    pub fn arity(&self, opcode: Opcode) -> Option<usize> {
        self.row_for(opcode).map(|row| row.arity)
    }

    /// Candidate per-axis maxima for a primitive opcode, given its arguments.
    pub fn axis_maxima(&self, opcode: Opcode, args: &[u32]) -> Option<[u32; 3]> {
        self.row_for(opcode).map(|row| row.axis_maxima(args))
    }

    fn row_for(&self, opcode: Opcode) -> Option<&PrimitiveRow> {
        ROWS.iter().find(|row| row.opcode == opcode)
    }
}

impl Default for OpTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lookup_known_names() {
        let table = OpTable::standard();
        assert_eq!(table.lookup("sphere"), Some(Opcode::Sphere));
        assert_eq!(table.lookup("box"), Some(Opcode::Box));
        assert_eq!(table.lookup("heart"), Some(Opcode::Heart));
    }

    #[test]
    fn test_lookup_unknown_names() {
        let table = OpTable::standard();
        assert_eq!(table.lookup("cube"), None);
        assert_eq!(table.lookup("Sphere"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_arities() {
        let table = OpTable::standard();
        assert_eq!(table.arity(Opcode::Sphere), Some(5));
        assert_eq!(table.arity(Opcode::Box), Some(7));
        assert_eq!(table.arity(Opcode::Heart), Some(5));
        assert_eq!(table.arity(Opcode::And), None);
        assert_eq!(table.arity(Opcode::Loop), None);
    }

    #[test]
    fn test_sphere_axis_maxima() {
        let table = OpTable::standard();
        let maxima = table.axis_maxima(Opcode::Sphere, &[1, 2, 3, 10, 0]).unwrap();
        assert_eq!(maxima, [11, 12, 13]);
    }

    #[test]
    fn test_box_axis_maxima() {
        let table = OpTable::standard();
        let maxima = table
            .axis_maxima(Opcode::Box, &[1, 2, 3, 10, 20, 30, 0])
            .unwrap();
        assert_eq!(maxima, [11, 22, 33]);
    }

    #[test]
    fn test_heart_uses_uniform_size() {
        let table = OpTable::standard();
        let maxima = table.axis_maxima(Opcode::Heart, &[5, 6, 7, 4, 9]).unwrap();
        assert_eq!(maxima, [9, 10, 11]);
    }

    #[test]
    fn test_non_primitive_has_no_extent_rule() {
        let table = OpTable::standard();
        assert_eq!(table.axis_maxima(Opcode::Not, &[0, 0]), None);
    }

    proptest! {
        // Each axis maximum covers at least its coordinate (no overflow in range).
        #[test]
        fn prop_axis_maxima_cover_coordinates(
            args in proptest::collection::vec(0u32..0x1000, 7),
        ) {
            let table = OpTable::standard();
            for opcode in [Opcode::Sphere, Opcode::Box, Opcode::Heart] {
                let maxima = table.axis_maxima(opcode, &args).unwrap();
                for axis in 0..3 {
                    prop_assert!(maxima[axis] >= args[axis]);
                }
            }
        }
    }
}
