use crate::common::NonEmpty;
use crate::dice::DiceKind;
use crate::parse::ParseError;
use crate::symbol::{ResultKind, SymbolTally};
use std::collections::HashMap;

/// One recorded outcome. A die of [DiceKind::None] marks a symbol that was
/// injected directly rather than rolled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Roll {
    pub die: DiceKind,
    pub face: ResultKind,
}

/// The finalized, queryable outcome of one notation string. Constructed
/// once from a [ResultBuilder](super::ResultBuilder) and immutable
/// thereafter.
///
/// When the notation failed to parse, the result is a degenerate error
/// form: [errors](Self::errors) is non-empty, every counter is zero, and
/// there are no rolls.
#[derive(Debug, Clone, PartialEq)]
pub struct RollResult {
    roll_string: String,
    tally: SymbolTally,
    rolls: Vec<Roll>,
    groups: HashMap<String, RollResult>,
    by_die: HashMap<DiceKind, Vec<ResultKind>>,
    errors: Vec<ParseError>,
}

impl RollResult {
    pub(crate) fn new(
        roll_string: String,
        rolls: Vec<Roll>,
        groups: HashMap<String, RollResult>,
    ) -> Self {
        let mut tally = SymbolTally::ZERO;
        let mut by_die: HashMap<DiceKind, Vec<ResultKind>> = HashMap::new();
        for roll in &rolls {
            tally += roll.face.counts();
            by_die.entry(roll.die).or_default().push(roll.face);
        }
        Self {
            roll_string,
            tally,
            rolls,
            groups,
            by_die,
            errors: Vec::new(),
        }
    }

    pub(crate) fn from_errors(roll_string: impl Into<String>, errors: NonEmpty<ParseError>) -> Self {
        Self {
            roll_string: roll_string.into(),
            tally: SymbolTally::ZERO,
            rolls: Vec::new(),
            groups: HashMap::new(),
            by_die: HashMap::new(),
            errors: errors.into_vec(),
        }
    }

    /// The string describing the dice that were rolled.
    pub fn roll_string(&self) -> &str {
        &self.roll_string
    }

    /// The eight summed symbol counts, folded over every roll (capture
    /// groups included).
    pub fn tally(&self) -> SymbolTally {
        self.tally
    }

    /// Every roll that occurred, in order, including those flattened in
    /// from capture groups.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Top-level capture-group names. Names nested inside a sub-result are
    /// not promoted.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn group(&self, name: &str) -> Option<&RollResult> {
        self.groups.get(name)
    }

    /// The faces rolled for one die kind, in roll order.
    pub fn dice_results(&self, die: DiceKind) -> &[ResultKind] {
        self.by_die.get(&die).map_or(&[], Vec::as_slice)
    }

    /// How many rolls came up as exactly `face`. This is an exact match
    /// over the roll list: a [ResultKind::SuccessAdvantage] roll counts
    /// toward the success and advantage totals but not toward
    /// `count_of(ResultKind::Success)`.
    pub fn count_of(&self, face: ResultKind) -> usize {
        self.rolls.iter().filter(|roll| roll.face == face).count()
    }

    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The parse diagnostics, in source order. Empty unless
    /// [is_error](Self::is_error).
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}
