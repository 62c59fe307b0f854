pub mod ast;
pub mod visit;

mod lexer;
mod parser;

pub use lexer::TokenKind;
pub use parser::{ParseError, ParseErrorKind};

use crate::common::NonEmpty;
use logos::Logos;
use vec1::vec1;

/// Parses a notation string into a syntax tree.
///
/// Diagnostics come back ordered: every lexical error in source order, or,
/// when the tokens themselves are clean, the first syntax error.
pub fn parse(s: &str) -> Result<ast::Pool<'_>, NonEmpty<ParseError>> {
    let mut lex_errors = Vec::new();
    let mut lexer = TokenKind::lexer(s);
    while let Some(token) = lexer.next() {
        if token == TokenKind::Error {
            lex_errors.push(ParseError {
                kind: ParseErrorKind::UnexpectedString,
                span: lexer.span(),
                slice: lexer.slice().to_string(),
            });
        }
    }
    if let Ok(errors) = NonEmpty::try_from_vec(lex_errors) {
        return Err(errors);
    }

    parser::Parser::new(s).parse().map_err(|e| vec1![e])
}
