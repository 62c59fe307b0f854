use super::{ast::*, lexer::*};
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

/// A value together with the byte range it was parsed from.
type Spanned<T> = (T, Range<usize>);

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: Vec<TokenKind>,
    },
    ExpectedRoll {
        found: Option<TokenKind>,
    },
    UnexpectedString,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                match found {
                    Some(token) => write!(f, "unexpected token: found {}, expected ", token)?,
                    None => write!(f, "unexpected end of input: expected ")?,
                }
                fmt_expected(expected, f)
            }
            Self::ExpectedRoll { found } => {
                write!(f, "expected a die, a symbol, a count, or '('")?;
                match found {
                    Some(token) => write!(f, "; found {}", token),
                    None => write!(f, "; found end of input"),
                }
            }
            Self::UnexpectedString => write!(f, "unrecognized input"),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let len = expected.len();

    if expected.is_empty() {
        Ok(())
    } else if len == 1 {
        f.write_str(expected[0].as_str())
    } else if len == 2 {
        write!(f, "{} or {}", expected[0], expected[1])
    } else {
        for exp in &expected[..len - 1] {
            write!(f, "{}, ", exp)?;
        }
        write!(f, "or {}", expected[len - 1])
    }
}

pub struct Parser<'a> {
    src: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            src: s,
            lexer: lexer(s),
        }
    }

    pub fn parse(mut self) -> Result<Pool<'a>, ParseError> {
        let (pool, _) = self.parse_pool()?;
        if self.lexer.peek().is_some() {
            return self.expected_roll();
        }
        Ok(pool)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.lexer
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(())
        } else {
            self.unexpected_token(vec![expected])
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        let found = self.lexer.next();
        if matches!(found, Some(TokenKind::Error)) {
            self.error(ParseErrorKind::UnexpectedString)
        } else {
            self.error(ParseErrorKind::UnexpectedToken { found, expected })
        }
    }

    fn expected_roll<T>(&mut self) -> PResult<T> {
        let found = self.lexer.next();
        if matches!(found, Some(TokenKind::Error)) {
            self.error(ParseErrorKind::UnexpectedString)
        } else {
            self.error(ParseErrorKind::ExpectedRoll { found })
        }
    }

    fn parse_pool(&mut self) -> PResult<Spanned<Pool<'a>>> {
        let (first, mut span) = self.parse_roll()?;
        let mut rolls = vec![first];
        while self.matches_any(TokenKind::ROLL_STARTERS) {
            let (roll, roll_span) = self.parse_roll()?;
            span.end = roll_span.end;
            rolls.push(roll);
        }
        let text = &self.src[span.clone()];
        Ok((Pool { rolls, text }, span))
    }

    fn parse_roll(&mut self) -> PResult<Spanned<Node<'a>>> {
        if self.matches_any(TokenKind::QUANTITIES) {
            let count = self.parse_quantity()?;
            let start = self.lexer.span().start;
            let (unit, unit_span) = self.parse_unit()?;
            let span = start..unit_span.end;
            let text = &self.src[span.clone()];
            Ok((
                Node::Repeat(Repeat {
                    count,
                    unit: Box::new(unit),
                    text,
                }),
                span,
            ))
        } else {
            self.parse_unit()
        }
    }

    fn parse_quantity(&mut self) -> PResult<Quantity<'a>> {
        let token = self.lexer.next().expect("caller matched a quantity token");
        let text = self.lexer.slice();
        Ok(match token {
            TokenKind::Integer => Quantity::Literal(text),
            TokenKind::Variable => Quantity::Variable(text),
            TokenKind::Property => Quantity::Property(text),
            TokenKind::Prompt => Quantity::Prompt(text),
            _ => unreachable!("not a quantity token"),
        })
    }

    fn parse_unit(&mut self) -> PResult<Spanned<Node<'a>>> {
        let peeked = self.lexer.peek().copied();
        if peeked == Some(TokenKind::LeftParen) {
            return self.parse_parens();
        }
        if let Some(kind) = peeked.and_then(|t| t.as_dice_kind()) {
            self.lexer.next();
            let span = self.lexer.span();
            let node = Node::Die(DieNode {
                kind,
                text: self.lexer.slice(),
            });
            return Ok((node, span));
        }
        if let Some(kind) = peeked.and_then(|t| t.as_result_kind()) {
            self.lexer.next();
            let span = self.lexer.span();
            let node = Node::Symbol(SymbolNode {
                kind,
                text: self.lexer.slice(),
            });
            return Ok((node, span));
        }
        self.expected_roll()
    }

    fn parse_parens(&mut self) -> PResult<Spanned<Node<'a>>> {
        self.consume(TokenKind::LeftParen)?;
        let start = self.lexer.span().start;

        if self.matches(TokenKind::GroupName) {
            self.lexer.next();
            let name = self.lexer.slice();
            let (pool, _) = self.parse_pool()?;
            self.consume(TokenKind::RightParen)?;
            let span = start..self.lexer.span().end;
            let text = &self.src[span.clone()];
            Ok((Node::Group(Group { name, pool, text }), span))
        } else {
            let (mut pool, _) = self.parse_pool()?;
            self.consume(TokenKind::RightParen)?;
            let span = start..self.lexer.span().end;
            pool.text = &self.src[span.clone()];
            Ok((Node::Pool(pool), span))
        }
    }
}
