//! Roller for the narrative dice notation used by the Genesys and Star
//! Wars tabletop systems.
//!
//! A notation string mixes die tokens (`b`, `s`, `a`, `d`, `p`, `c`,
//! `y`/`f`), symbol literals (`success`, `threat`, ...), repetition counts
//! (`3b`, `$ranks b`, `@agility c`, `${?how many}f`), and named capture
//! groups (`(hit: 2a p)`). Evaluating one produces a [RollResult]: a tally
//! over the eight outcome symbols plus the full roll list and per-group
//! sub-results, rather than a numeric total.
//!
//! ```
//! use genesys_dice::{roll, FnResolver};
//!
//! let result = roll("2a p (hit: b b)", FnResolver::new(|_| 1, |_| 1, |_| 1));
//! assert_eq!(result.rolls().len(), 5);
//! assert!(result.group("hit").is_some());
//! ```

pub mod common;
pub mod dice;
pub mod parse;
pub mod roll;
pub mod symbol;

pub use dice::DiceKind;
pub use parse::{parse, ParseError, ParseErrorKind};
pub use roll::{
    DefaultRoller, FnResolver, Resolver, Roll, RollContext, RollResult, Roller, ResultBuilder,
};
pub use symbol::{ResultKind, SymbolTally};

/// Rolls `input` with the thread-local random source.
///
/// Never fails: malformed input yields an error-form [RollResult] carrying
/// the diagnostics, with no dice rolled and no resolver consulted.
pub fn roll(input: &str, resolver: impl Resolver) -> RollResult {
    roll_with(input, resolver, rand::thread_rng())
}

/// Rolls `input`, drawing every die face from `roller`.
pub fn roll_with(input: &str, resolver: impl Resolver, roller: impl Roller) -> RollResult {
    match parse::parse(input) {
        Ok(pool) => RollContext::new(resolver, roller).eval(input, &pool),
        Err(errors) => RollResult::from_errors(input, errors),
    }
}
