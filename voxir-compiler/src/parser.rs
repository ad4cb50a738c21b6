//! # Parser for the VOXIR Scene Language
//!
//! Recursive descent over the token stream. Grammar:
//!
//! ```text
//! scene   := expr EOF
//! expr    := union
//! union   := inter ( '|' inter )*
//! inter   := unary ( '&' unary )*
//! unary   := '!' unary | primary
//! primary := '(' expr ')' | call
//! call    := IDENT '(' [ NUM ( ',' NUM )* ] ')'
//! ```
//!
//! `&` binds tighter than `|`, `!` tightest; both binary operators associate
//! left. The parser builds the tree without consulting the operation table:
//! unknown primitive names and wrong argument counts are validation's job,
//! so they surface as diagnostics rather than syntax errors.

use crate::ast::{Args, Ast, Call, Expr};
use crate::error::{CompileError, Result};
use crate::lexer::Token;
use logos::Logos;
use std::ops::Range;

/// Parse one scene description into an expression tree.
pub fn parse(source: &str) -> Result<Ast> {
    let mut parser = Parser::new(source)?;
    let root = parser.parse_expr()?;
    parser.expect_eof()?;
    Ok(Ast::new(root))
}

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Result<Self> {
        let mut tokens = Vec::new();
        for (result, span) in Token::lexer(source).spanned() {
            match result {
                Ok(token) => tokens.push((token, span)),
                Err(()) => {
                    return Err(syntax_error(
                        source,
                        span.start,
                        format!("unrecognized character `{}`", &source[span.clone()]),
                    ));
                }
            }
        }
        Ok(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(token, _)| token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the next token if it matches.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token, context: &str) -> Result<()> {
        if self.eat(&expected) {
            Ok(())
        } else {
            Err(self.error_here(format!("expected {} {}", describe(&expected), context)))
        }
    }

    fn expect_eof(&mut self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => {
                let token = token.clone();
                Err(self.error_here(format!(
                    "expected end of input, found {}",
                    describe(&token)
                )))
            }
        }
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_union()
    }

    fn parse_union(&mut self) -> Result<Expr> {
        let mut expr = self.parse_intersect()?;
        while self.eat(&Token::Pipe) {
            let rhs = self.parse_intersect()?;
            expr = Expr::union(expr, rhs);
        }
        Ok(expr)
    }

    fn parse_intersect(&mut self) -> Result<Expr> {
        let mut expr = self.parse_unary()?;
        while self.eat(&Token::Amp) {
            let rhs = self.parse_unary()?;
            expr = Expr::intersect(expr, rhs);
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        if self.eat(&Token::Bang) {
            let operand = self.parse_unary()?;
            Ok(Expr::complement(operand))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.advance() {
            Some(Token::LParen) => {
                let expr = self.parse_expr()?;
                self.expect(Token::RParen, "to close the group")?;
                Ok(expr)
            }
            Some(Token::Identifier(name)) => self.parse_call(name),
            Some(token) => {
                self.pos -= 1;
                Err(self.error_here(format!(
                    "expected a primitive call or `(`, found {}",
                    describe(&token)
                )))
            }
            None => Err(CompileError::UnexpectedEof),
        }
    }

    fn parse_call(&mut self, name: String) -> Result<Expr> {
        self.expect(Token::LParen, &format!("after `{}`", name))?;

        let mut values = Vec::new();
        if !self.eat(&Token::RParen) {
            loop {
                values.push(self.parse_number()?);
                if self.eat(&Token::RParen) {
                    break;
                }
                self.expect(Token::Comma, "between arguments")?;
            }
        }

        Ok(Expr::Call(Call::new(name, Args::new(values))))
    }

    fn parse_number(&mut self) -> Result<u32> {
        match self.advance() {
            Some(Token::Number(value)) | Some(Token::Hex(value)) => Ok(value),
            Some(token) => {
                self.pos -= 1;
                Err(self.error_here(format!("expected a number, found {}", describe(&token))))
            }
            None => Err(CompileError::UnexpectedEof),
        }
    }

    /// Syntax error at the current token (or at end of input).
    fn error_here(&self, message: String) -> CompileError {
        match self.tokens.get(self.pos) {
            Some((_, span)) => syntax_error(self.source, span.start, message),
            None => CompileError::UnexpectedEof,
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Identifier(name) => format!("`{}`", name),
        Token::Number(value) => format!("`{}`", value),
        Token::Hex(value) => format!("`{:#x}`", value),
        Token::LParen => "`(`".to_string(),
        Token::RParen => "`)`".to_string(),
        Token::Comma => "`,`".to_string(),
        Token::Bang => "`!`".to_string(),
        Token::Amp => "`&`".to_string(),
        Token::Pipe => "`|`".to_string(),
    }
}

fn syntax_error(source: &str, offset: usize, message: String) -> CompileError {
    let upto = &source[..offset];
    let line = upto.matches('\n').count() + 1;
    let column = offset - upto.rfind('\n').map(|i| i + 1).unwrap_or(0) + 1;
    CompileError::SyntaxError {
        line,
        column,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_call() {
        let ast = parse("sphere(0, 0, 0, 5, 0)").unwrap();
        assert_eq!(format!("{}", ast), "sphere(0, 0, 0, 5, 0)");
    }

    #[test]
    fn test_parse_precedence() {
        // & binds tighter than |
        let ast = parse("sphere(1) | box(2) & heart(3)").unwrap();
        assert_eq!(format!("{}", ast), "(sphere(1) | (box(2) & heart(3)))");
    }

    #[test]
    fn test_parse_left_associativity() {
        let ast = parse("sphere(1) & box(2) & heart(3)").unwrap();
        assert_eq!(format!("{}", ast), "((sphere(1) & box(2)) & heart(3))");
    }

    #[test]
    fn test_parse_parens_override_precedence() {
        let ast = parse("(sphere(1) | box(2)) & heart(3)").unwrap();
        assert_eq!(format!("{}", ast), "((sphere(1) | box(2)) & heart(3))");
    }

    #[test]
    fn test_parse_complement() {
        let ast = parse("!heart(1, 1, 1, 3, 0)").unwrap();
        assert_eq!(format!("{}", ast), "(!heart(1, 1, 1, 3, 0))");

        let ast = parse("!!sphere(1)").unwrap();
        assert_eq!(format!("{}", ast), "(!(!sphere(1)))");
    }

    #[test]
    fn test_parse_hex_arguments() {
        let ast = parse("sphere(0x10, 0, 0, 0xFF, 0)").unwrap();
        assert_eq!(format!("{}", ast), "sphere(16, 0, 0, 255, 0)");
    }

    #[test]
    fn test_parse_empty_argument_list() {
        // Syntactically fine; validation rejects the arity
        let ast = parse("sphere()").unwrap();
        assert_eq!(format!("{}", ast), "sphere()");
    }

    #[test]
    fn test_parse_unknown_name_is_not_a_syntax_error() {
        assert!(parse("cube(1, 2, 3)").is_ok());
    }

    #[test]
    fn test_parse_missing_close_paren() {
        let err = parse("sphere(1, 2").unwrap_err();
        assert!(matches!(err, CompileError::UnexpectedEof));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        let err = parse("sphere(1) sphere(2)").unwrap_err();
        match err {
            CompileError::SyntaxError { line, column, .. } => {
                assert_eq!(line, 1);
                assert_eq!(column, 11);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_location_spans_lines() {
        let err = parse("sphere(1) &\n| box(2)").unwrap_err();
        match err {
            CompileError::SyntaxError { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, 1);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_dangling_operator() {
        let err = parse("sphere(1) &").unwrap_err();
        assert!(matches!(err, CompileError::UnexpectedEof));
    }

    #[test]
    fn test_parse_unrecognized_character() {
        let err = parse("sphere(1) @ box(2)").unwrap_err();
        match err {
            CompileError::SyntaxError { message, .. } => {
                assert!(message.contains("unrecognized character"));
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }
}
