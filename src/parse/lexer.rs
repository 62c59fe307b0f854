use crate::dice::DiceKind;
use crate::symbol::ResultKind;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[token("b")]
    Boost,
    #[token("s")]
    Setback,
    #[token("a")]
    Ability,
    #[token("d")]
    Difficulty,
    #[token("p")]
    Proficiency,
    #[token("c")]
    Challenge,
    #[token("y")]
    #[token("f")]
    Force,

    #[token("success")]
    Success,
    #[token("failure")]
    Failure,
    #[token("advantage")]
    Advantage,
    #[token("threat")]
    Threat,
    #[token("triumph")]
    Triumph,
    #[token("despair")]
    Despair,
    #[token("light")]
    Light,
    #[token("dark")]
    Dark,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*:")]
    GroupName,
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    Variable,
    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    Property,
    #[regex(r"\$\{\?[^}]*\}")]
    Prompt,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    /// Tokens that can open a roll expression.
    pub const ROLL_STARTERS: &'static [Self] = &[
        Self::Integer,
        Self::Variable,
        Self::Property,
        Self::Prompt,
        Self::Boost,
        Self::Setback,
        Self::Ability,
        Self::Difficulty,
        Self::Proficiency,
        Self::Challenge,
        Self::Force,
        Self::Success,
        Self::Failure,
        Self::Advantage,
        Self::Threat,
        Self::Triumph,
        Self::Despair,
        Self::Light,
        Self::Dark,
        Self::LeftParen,
    ];

    pub const QUANTITIES: &'static [Self] =
        &[Self::Integer, Self::Variable, Self::Property, Self::Prompt];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer => "<integer>",
            Boost => "'b'",
            Setback => "'s'",
            Ability => "'a'",
            Difficulty => "'d'",
            Proficiency => "'p'",
            Challenge => "'c'",
            Force => "'y'",
            Success => "'success'",
            Failure => "'failure'",
            Advantage => "'advantage'",
            Threat => "'threat'",
            Triumph => "'triumph'",
            Despair => "'despair'",
            Light => "'light'",
            Dark => "'dark'",
            GroupName => "<group name>",
            Variable => "<variable>",
            Property => "<property>",
            Prompt => "<prompt>",
            LeftParen => "'('",
            RightParen => "')'",
            Error => "<error>",
        }
    }

    pub fn as_dice_kind(&self) -> Option<DiceKind> {
        Some(match self {
            Self::Boost => DiceKind::Boost,
            Self::Setback => DiceKind::Setback,
            Self::Ability => DiceKind::Ability,
            Self::Difficulty => DiceKind::Difficulty,
            Self::Proficiency => DiceKind::Proficiency,
            Self::Challenge => DiceKind::Challenge,
            Self::Force => DiceKind::Force,
            _ => return None,
        })
    }

    pub fn as_result_kind(&self) -> Option<ResultKind> {
        Some(match self {
            Self::Success => ResultKind::Success,
            Self::Failure => ResultKind::Failure,
            Self::Advantage => ResultKind::Advantage,
            Self::Threat => ResultKind::Threat,
            Self::Triumph => ResultKind::Triumph,
            Self::Despair => ResultKind::Despair,
            Self::Light => ResultKind::Light,
            Self::Dark => ResultKind::Dark,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    fn lex(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_lex_dice_letters() {
        use TokenKind::*;
        assert_eq!(
            lex("b s a d p c y f"),
            vec![Boost, Setback, Ability, Difficulty, Proficiency, Challenge, Force, Force],
        );
    }

    #[test]
    fn test_lex_symbol_keywords_are_single_tokens() {
        use TokenKind::*;
        assert_eq!(lex("success"), vec![Success]);
        assert_eq!(lex("despair dark"), vec![Despair, Dark]);
        // A keyword immediately after digits still lexes whole.
        assert_eq!(lex("2dark"), vec![Integer, Dark]);
    }

    #[test]
    fn test_lex_full_example() {
        use TokenKind::*;
        assert_eq!(
            lex("2y (boost: 2b (subboost: 4b)) ${?whats the value}f"),
            vec![
                Integer, Force, LeftParen, GroupName, Integer, Boost, LeftParen, GroupName,
                Integer, Boost, RightParen, RightParen, Prompt, Force,
            ],
        );
    }

    #[test]
    fn test_lex_quantity_sigils() {
        use TokenKind::*;
        assert_eq!(lex("$ranks @agility ${?how many?}"), vec![Variable, Property, Prompt]);
    }

    #[test]
    fn test_lex_group_name_beats_die_letter() {
        use TokenKind::*;
        assert_eq!(lex("b:"), vec![GroupName]);
        assert_eq!(lex("b"), vec![Boost]);
    }

    #[test]
    fn test_lex_errors() {
        use TokenKind::*;
        assert_eq!(lex("2y!"), vec![Integer, Force, Error]);
        assert_eq!(lex("#"), vec![Error]);
    }
}
