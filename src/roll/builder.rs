use super::result::{Roll, RollResult};
use super::roller::Roller;
use crate::dice::DiceKind;
use crate::symbol::ResultKind;
use std::collections::HashMap;

/// Mutable aggregate of rolls-so-far: a roll-string fragment, an ordered
/// roll list, and named sub-aggregates for capture groups. The unit of
/// composition during tree evaluation.
#[derive(Debug, Default, Clone)]
pub struct ResultBuilder {
    roll_string: String,
    rolls: Vec<Roll>,
    groups: HashMap<String, ResultBuilder>,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the descriptive fragment.
    pub fn set_roll_string(&mut self, roll_string: impl Into<String>) -> &mut Self {
        self.roll_string = roll_string.into();
        self
    }

    /// Appends a symbol that was added directly rather than rolled.
    pub fn add_symbol(&mut self, face: ResultKind) -> &mut Self {
        self.add_roll(DiceKind::None, face)
    }

    /// Appends an outcome that is already known.
    pub fn add_roll(&mut self, die: DiceKind, face: ResultKind) -> &mut Self {
        self.rolls.push(Roll { die, face });
        self
    }

    /// Draws one face from `die` and appends the outcome.
    pub fn roll<R: Roller + ?Sized>(&mut self, die: DiceKind, roller: &mut R) -> &mut Self {
        let face = die.roll(roller);
        self.add_roll(die, face)
    }

    /// Registers `group` under `name` AND appends its rolls to this
    /// builder's own list: groups stay addressable by name while their
    /// rolls count toward every ancestor's totals.
    pub fn add_group(&mut self, name: impl Into<String>, group: ResultBuilder) -> &mut Self {
        self.rolls.extend_from_slice(&group.rolls);
        self.groups.insert(name.into(), group);
        self
    }

    /// Folds `other` into this builder: roll strings and roll lists
    /// concatenate; group maps union, later entries overwriting earlier
    /// ones with the same name.
    pub fn merge(&mut self, other: ResultBuilder) -> &mut Self {
        self.roll_string.push_str(&other.roll_string);
        self.rolls.extend(other.rolls);
        self.groups.extend(other.groups);
        self
    }

    pub fn merge_all(&mut self, others: impl IntoIterator<Item = ResultBuilder>) -> &mut Self {
        for other in others {
            self.merge(other);
        }
        self
    }

    /// Builds the immutable result, recursively building every registered
    /// group. The builder is left untouched; building twice yields two
    /// independent equal snapshots.
    pub fn build(&self) -> RollResult {
        let groups = self
            .groups
            .iter()
            .map(|(name, group)| (name.clone(), group.build()))
            .collect();
        RollResult::new(self.roll_string.clone(), self.rolls.clone(), groups)
    }
}
