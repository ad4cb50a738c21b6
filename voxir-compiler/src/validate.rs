//! # Semantic Validation
//!
//! Checks every primitive call against the operation table (known name,
//! exact arity) and infers the scene's bounding extent: the running maximum
//! of every primitive's per-axis reach, folded across the whole tree.
//!
//! Diagnostics are collected, not thrown. A binary node validates both of
//! its children even when the first fails, so one pass reports everything
//! wrong with a scene and the folded extent stays conservative for the
//! parts that are well-formed.

use crate::ast::{Ast, Call, Expr};
use thiserror::Error;
use tracing::debug;
use voxir_spec::OpTable;

/// Validation error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error("Unknown primitive name: {name}")]
    UnknownPrimitive { name: String },

    #[error("Invalid argument count for {name}: expected {expected}, found {found}")]
    WrongArgumentCount {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl ValidateError {
    /// The offending primitive name, verbatim from the source.
    pub fn primitive_name(&self) -> &str {
        match self {
            ValidateError::UnknownPrimitive { name } => name,
            ValidateError::WrongArgumentCount { name, .. } => name,
        }
    }
}

/// Everything one validation pass found.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidateError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn add_error(&mut self, error: ValidateError) {
        self.errors.push(error);
    }
}

impl Call {
    /// Validate this call and fold its reach into the running extent.
    ///
    /// The extent is only folded for a call with the correct argument
    /// count; a malformed call contributes nothing.
    pub(crate) fn validate(
        &self,
        table: &OpTable,
        extent: &mut u32,
        report: &mut ValidationReport,
    ) -> bool {
        let Some(row) = table.find(self.name()) else {
            debug!(name = self.name(), "unknown primitive");
            report.add_error(ValidateError::UnknownPrimitive {
                name: self.name().to_string(),
            });
            return false;
        };

        if self.args().len() != row.arity {
            debug!(
                name = self.name(),
                expected = row.arity,
                found = self.args().len(),
                "argument count mismatch"
            );
            report.add_error(ValidateError::WrongArgumentCount {
                name: self.name().to_string(),
                expected: row.arity,
                found: self.args().len(),
            });
            return false;
        }

        for max in row.axis_maxima(self.args().values()) {
            *extent = (*extent).max(max);
        }
        true
    }
}

impl Expr {
    pub(crate) fn validate(
        &self,
        table: &OpTable,
        extent: &mut u32,
        report: &mut ValidationReport,
    ) -> bool {
        match self {
            Expr::Call(call) => call.validate(table, extent, report),
            Expr::Complement(child) => child.validate(table, extent, report),
            Expr::Intersect(lhs, rhs) | Expr::Union(lhs, rhs) => {
                // Both sides always run, so the report and the extent cover
                // the whole tree.
                let lhs_ok = lhs.validate(table, extent, report);
                let rhs_ok = rhs.validate(table, extent, report);
                lhs_ok && rhs_ok
            }
        }
    }
}

impl Ast {
    /// Validate the whole scene, inferring the bounding extent from zero.
    pub fn validate(&mut self, table: &OpTable) -> ValidationReport {
        self.validate_from(table, 0)
    }

    /// Validate with a caller-supplied extent floor.
    ///
    /// On success the folded extent is stored on the scene; a failed pass
    /// leaves the stored extent untouched.
    pub fn validate_from(&mut self, table: &OpTable, floor: u32) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut extent = floor;

        if self.root().validate(table, &mut extent, &mut report) {
            self.set_extent(extent);
            debug!(extent, "scene validated");
        }

        report
    }
}
