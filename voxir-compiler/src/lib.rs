//! # VOXIR Scene Compiler
//!
//! Compile textual scene descriptions into VOXIR instruction streams.
//!
//! A scene is a boolean combination of implicit-surface primitives:
//!
//! ```text
//! # a sphere with a box-shaped bite taken out
//! sphere(0, 0, 0, 5, 0) & !box(0, 0, 0, 2, 2, 2, 0)
//! ```
//!
//! The compiler parses the source into an expression tree, validates every
//! primitive call against the operation table while inferring the scene's
//! bounding extent, then lowers the tree into flat three-address
//! instructions over a monotonically numbered register file.
//!
//! ## Example
//!
//! ```rust
//! use voxir_compiler::compile;
//!
//! let program = compile("sphere(0, 0, 0, 5, 0)").unwrap();
//!
//! assert_eq!(program.header.extent, 5);
//! // loop + sphere + draw + jump
//! assert_eq!(program.instructions().unwrap().len(), 4);
//! ```

pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod validate;

pub use ast::{Args, Ast, Call, Expr};
pub use error::{CompileError, Result};
pub use parser::parse;
pub use validate::{ValidateError, ValidationReport};

use tracing::debug;
use voxir_spec::{OpTable, Program, StreamWriter};

/// Compile a scene description against the standard operation table.
pub fn compile(source: &str) -> Result<Program> {
    compile_with_table(source, &OpTable::standard())
}

/// Compile a scene description against a caller-supplied operation table.
pub fn compile_with_table(source: &str, table: &OpTable) -> Result<Program> {
    let mut ast = parse(source)?;

    let report = ast.validate(table);
    if !report.is_valid() {
        return Err(CompileError::Validation {
            errors: report.errors,
        });
    }

    let mut writer = StreamWriter::new();
    ast.emit(table, &mut writer);
    debug!(
        instructions = writer.len(),
        extent = ast.extent(),
        "scene compiled"
    );

    Ok(writer.into_program(ast.extent()))
}
