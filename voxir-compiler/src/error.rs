//! Compiler errors

use crate::validate::ValidateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("{}", .errors.first().map(|e| e.to_string()).unwrap_or_else(|| "Validation failed".to_string()))]
    Validation { errors: Vec<ValidateError> },
}

pub type Result<T> = std::result::Result<T, CompileError>;
