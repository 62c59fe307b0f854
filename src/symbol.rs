use crate::common::UInt;
use std::fmt;
use std::ops::{Add, AddAssign};

/// A single face outcome: one of the eight atomic symbols, a blank, or a
/// combined face carrying two symbols at once.
///
/// The set is closed; the per-kind data below reproduces the published
/// tables exactly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResultKind {
    Success,
    Failure,
    Advantage,
    Threat,
    Triumph,
    Despair,
    Light,
    Dark,
    /// A blank face.
    None,
    SuccessAdvantage,
    AdvantageAdvantage,
    SuccessSuccess,
    FailureThreat,
    FailureFailure,
    ThreatThreat,
    LightLight,
    DarkDark,
}

impl ResultKind {
    /// The symbol counts this face contributes to a roll's totals.
    ///
    /// A triumph also counts one success and a despair one failure; the
    /// combined faces count both of their symbols.
    pub const fn counts(self) -> SymbolTally {
        match self {
            Self::Success => tally(1, 0, 0, 0, 0, 0, 0, 0),
            Self::Failure => tally(0, 1, 0, 0, 0, 0, 0, 0),
            Self::Advantage => tally(0, 0, 1, 0, 0, 0, 0, 0),
            Self::Threat => tally(0, 0, 0, 1, 0, 0, 0, 0),
            Self::Triumph => tally(1, 0, 0, 0, 1, 0, 0, 0),
            Self::Despair => tally(0, 1, 0, 0, 0, 1, 0, 0),
            Self::Light => tally(0, 0, 0, 0, 0, 0, 1, 0),
            Self::Dark => tally(0, 0, 0, 0, 0, 0, 0, 1),
            Self::None => tally(0, 0, 0, 0, 0, 0, 0, 0),
            Self::SuccessAdvantage => tally(1, 0, 1, 0, 0, 0, 0, 0),
            Self::AdvantageAdvantage => tally(0, 0, 2, 0, 0, 0, 0, 0),
            Self::SuccessSuccess => tally(2, 0, 0, 0, 0, 0, 0, 0),
            Self::FailureThreat => tally(0, 1, 0, 1, 0, 0, 0, 0),
            Self::FailureFailure => tally(0, 2, 0, 0, 0, 0, 0, 0),
            Self::ThreatThreat => tally(0, 0, 0, 2, 0, 0, 0, 0),
            Self::LightLight => tally(0, 0, 0, 0, 0, 0, 2, 0),
            Self::DarkDark => tally(0, 0, 0, 0, 0, 0, 0, 2),
        }
    }

    /// The characters that render this face in the dice font.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Success => "s",
            Self::Failure => "f",
            Self::Advantage => "a",
            Self::Threat => "h",
            Self::Triumph => "t",
            Self::Despair => "d",
            Self::Light => "Z",
            Self::Dark => "z",
            Self::None => " ",
            Self::SuccessAdvantage => "sa",
            Self::AdvantageAdvantage => "aa",
            Self::SuccessSuccess => "ss",
            Self::FailureThreat => "fh",
            Self::FailureFailure => "ff",
            Self::ThreatThreat => "hh",
            Self::LightLight => "ZZ",
            Self::DarkDark => "zz",
        }
    }

    /// Sort rank used when grouping results for display. The combined faces
    /// and the blank share the unranked value 99.
    pub const fn group_sort(self) -> u8 {
        match self {
            Self::Success => 1,
            Self::Failure => 2,
            Self::Advantage => 3,
            Self::Threat => 4,
            Self::Triumph => 5,
            Self::Despair => 6,
            Self::Light => 7,
            Self::Dark => 8,
            _ => 99,
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Advantage => "advantage",
            Self::Threat => "threat",
            Self::Triumph => "triumph",
            Self::Despair => "despair",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::None => "none",
            Self::SuccessAdvantage => "success+advantage",
            Self::AdvantageAdvantage => "advantage+advantage",
            Self::SuccessSuccess => "success+success",
            Self::FailureThreat => "failure+threat",
            Self::FailureFailure => "failure+failure",
            Self::ThreatThreat => "threat+threat",
            Self::LightLight => "light+light",
            Self::DarkDark => "dark+dark",
        };
        f.write_str(s)
    }
}

/// Totals over the eight symbol dimensions.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SymbolTally {
    pub success: UInt,
    pub failure: UInt,
    pub advantage: UInt,
    pub threat: UInt,
    pub triumph: UInt,
    pub despair: UInt,
    pub light: UInt,
    pub dark: UInt,
}

const fn tally(
    success: UInt,
    failure: UInt,
    advantage: UInt,
    threat: UInt,
    triumph: UInt,
    despair: UInt,
    light: UInt,
    dark: UInt,
) -> SymbolTally {
    SymbolTally {
        success,
        failure,
        advantage,
        threat,
        triumph,
        despair,
        light,
        dark,
    }
}

impl SymbolTally {
    pub const ZERO: Self = tally(0, 0, 0, 0, 0, 0, 0, 0);

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for SymbolTally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        tally(
            self.success + rhs.success,
            self.failure + rhs.failure,
            self.advantage + rhs.advantage,
            self.threat + rhs.threat,
            self.triumph + rhs.triumph,
            self.despair + rhs.despair,
            self.light + rhs.light,
            self.dark + rhs.dark,
        )
    }
}

impl AddAssign for SymbolTally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for SymbolTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            (self.success, "success"),
            (self.failure, "failure"),
            (self.advantage, "advantage"),
            (self.threat, "threat"),
            (self.triumph, "triumph"),
            (self.despair, "despair"),
            (self.light, "light"),
            (self.dark, "dark"),
        ];

        let mut first = true;
        for (count, name) in fields {
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", count, name)?;
            first = false;
        }
        if first {
            f.write_str("nothing")?;
        }
        Ok(())
    }
}
