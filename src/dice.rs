use crate::common::{NonZeroUInt, UInt};
use crate::roll::Roller;
use crate::symbol::ResultKind;
use std::fmt;

/// One of the seven physical die kinds, or the [DiceKind::None] sentinel
/// recording a symbol that was added directly rather than rolled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DiceKind {
    Boost,
    Setback,
    Ability,
    Difficulty,
    Proficiency,
    Challenge,
    Force,
    /// Not a die; has no faces and is never drawn from.
    None,
}

use ResultKind::*;

const BOOST_FACES: [ResultKind; 6] = [
    None,
    None,
    Success,
    SuccessAdvantage,
    AdvantageAdvantage,
    Advantage,
];

const SETBACK_FACES: [ResultKind; 6] = [None, None, Failure, Failure, Threat, Threat];

const ABILITY_FACES: [ResultKind; 8] = [
    None,
    Success,
    Success,
    SuccessSuccess,
    Advantage,
    Advantage,
    SuccessAdvantage,
    AdvantageAdvantage,
];

const DIFFICULTY_FACES: [ResultKind; 8] = [
    None,
    Failure,
    FailureFailure,
    Threat,
    Threat,
    Threat,
    ThreatThreat,
    FailureThreat,
];

const PROFICIENCY_FACES: [ResultKind; 12] = [
    None,
    Success,
    Success,
    SuccessSuccess,
    SuccessSuccess,
    Advantage,
    SuccessAdvantage,
    SuccessAdvantage,
    SuccessAdvantage,
    AdvantageAdvantage,
    AdvantageAdvantage,
    Triumph,
];

const CHALLENGE_FACES: [ResultKind; 12] = [
    None,
    Failure,
    Failure,
    FailureFailure,
    FailureFailure,
    Threat,
    Threat,
    FailureThreat,
    FailureThreat,
    ThreatThreat,
    ThreatThreat,
    Despair,
];

const FORCE_FACES: [ResultKind; 12] = [
    Dark,
    Dark,
    Dark,
    Dark,
    Dark,
    Dark,
    DarkDark,
    Light,
    Light,
    LightLight,
    LightLight,
    LightLight,
];

impl DiceKind {
    /// The seven physical dice, in group-sort order.
    pub const ALL: [Self; 7] = [
        Self::Boost,
        Self::Setback,
        Self::Ability,
        Self::Difficulty,
        Self::Proficiency,
        Self::Challenge,
        Self::Force,
    ];

    /// The ordered face list. Empty for the [DiceKind::None] sentinel.
    pub const fn faces(self) -> &'static [ResultKind] {
        match self {
            Self::Boost => &BOOST_FACES,
            Self::Setback => &SETBACK_FACES,
            Self::Ability => &ABILITY_FACES,
            Self::Difficulty => &DIFFICULTY_FACES,
            Self::Proficiency => &PROFICIENCY_FACES,
            Self::Challenge => &CHALLENGE_FACES,
            Self::Force => &FORCE_FACES,
            Self::None => &[],
        }
    }

    pub const fn sides(self) -> usize {
        self.faces().len()
    }

    /// Sort rank used when grouping dice for display.
    pub const fn group_sort(self) -> u8 {
        match self {
            Self::Boost => 0,
            Self::Setback => 1,
            Self::Ability => 2,
            Self::Difficulty => 3,
            Self::Proficiency => 4,
            Self::Challenge => 5,
            Self::Force => 6,
            Self::None => 99,
        }
    }

    /// Draws one uniform integer in `1..=sides` from `roller` and returns
    /// the face it lands on. A faceless kind yields [ResultKind::None]
    /// without drawing.
    pub fn roll<R: Roller + ?Sized>(self, roller: &mut R) -> ResultKind {
        match NonZeroUInt::new(self.sides() as UInt) {
            Some(sides) => self.faces()[(roller.roll(sides) - 1) as usize],
            Option::None => ResultKind::None,
        }
    }
}

impl fmt::Display for DiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Boost => "boost",
            Self::Setback => "setback",
            Self::Ability => "ability",
            Self::Difficulty => "difficulty",
            Self::Proficiency => "proficiency",
            Self::Challenge => "challenge",
            Self::Force => "force",
            Self::None => "none",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::StepRoller;

    #[test]
    fn test_side_counts() {
        assert_eq!(DiceKind::Boost.sides(), 6);
        assert_eq!(DiceKind::Setback.sides(), 6);
        assert_eq!(DiceKind::Ability.sides(), 8);
        assert_eq!(DiceKind::Difficulty.sides(), 8);
        assert_eq!(DiceKind::Proficiency.sides(), 12);
        assert_eq!(DiceKind::Challenge.sides(), 12);
        assert_eq!(DiceKind::Force.sides(), 12);
        assert_eq!(DiceKind::None.sides(), 0);
    }

    #[test]
    fn test_roll_walks_every_face_in_order() {
        for die in DiceKind::ALL {
            let mut roller = StepRoller::new(1, 1);
            for &face in die.faces() {
                assert_eq!(die.roll(&mut roller), face);
            }
        }
    }

    #[test]
    fn test_roll_stays_within_face_list() {
        let mut roller = StepRoller::new(3, 7);
        for _ in 0..100 {
            for die in DiceKind::ALL {
                let face = die.roll(&mut roller);
                assert!(die.faces().contains(&face), "{} rolled {}", die, face);
            }
        }
    }

    #[test]
    fn test_first_faces() {
        let mut roller = StepRoller::new(1, 0);
        assert_eq!(DiceKind::Force.roll(&mut roller), ResultKind::Dark);
        assert_eq!(DiceKind::Ability.roll(&mut roller), ResultKind::None);
        assert_eq!(DiceKind::Proficiency.roll(&mut roller), ResultKind::None);
    }

    #[test]
    fn test_faceless_sentinel_rolls_blank() {
        let mut roller = StepRoller::new(1, 1);
        assert_eq!(DiceKind::None.roll(&mut roller), ResultKind::None);
    }

    #[test]
    fn test_triumph_and_despair_appear_once() {
        let triumphs = DiceKind::Proficiency
            .faces()
            .iter()
            .filter(|&&f| f == ResultKind::Triumph)
            .count();
        let despairs = DiceKind::Challenge
            .faces()
            .iter()
            .filter(|&&f| f == ResultKind::Despair)
            .count();
        assert_eq!(triumphs, 1);
        assert_eq!(despairs, 1);
    }
}
