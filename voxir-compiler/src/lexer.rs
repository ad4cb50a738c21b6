//! # Lexer for the VOXIR Scene Language

use logos::Logos;

/// Tokens for scene descriptions
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace (the language is free-form)
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (primitive names)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Decimal number
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Number(u32),

    /// Hexadecimal number
    #[regex(r"0x[0-9a-fA-F]+", |lex| u32::from_str_radix(&lex.slice()[2..], 16).ok())]
    Hex(u32),

    /// Left parenthesis
    #[token("(")]
    LParen,

    /// Right parenthesis
    #[token(")")]
    RParen,

    /// Comma
    #[token(",")]
    Comma,

    /// Complement
    #[token("!")]
    Bang,

    /// Intersection
    #[token("&")]
    Amp,

    /// Union
    #[token("|")]
    Pipe,
}
