use super::builder::ResultBuilder;
use super::resolve::Resolver;
use super::result::RollResult;
use super::roller::Roller;
use crate::common::Int;
use crate::parse::ast;
use crate::parse::visit::{Accept, AstVisitor};

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Walks a parsed syntax tree and turns each construct into die draws or
/// direct symbol injections, accumulating a [ResultBuilder] per node.
///
/// The walk is a pure structural recursion: no node is visited more than
/// once per evaluation and nothing is cached between visits.
pub struct RollContext<V, R = DefaultRoller> {
    resolver: V,
    roller: R,
}

impl<V: Resolver, R: Roller> RollContext<V, R> {
    pub fn new(resolver: V, roller: R) -> Self {
        Self { resolver, roller }
    }

    /// Evaluates the tree and builds the immutable result, stamping it
    /// with the complete, unparsed input string.
    pub fn eval(&mut self, input: &str, pool: &ast::Pool<'_>) -> RollResult {
        let mut root = self.visit(pool);
        root.set_roll_string(input);
        root.build()
    }

    fn quantity(&mut self, count: &ast::Quantity<'_>) -> Int {
        match *count {
            // An integer too large for Int falls back to a count of 1.
            ast::Quantity::Literal(text) => text.parse().unwrap_or(1),
            ast::Quantity::Variable(text) => self.resolver.resolve_variable(text),
            ast::Quantity::Property(text) => self.resolver.resolve_property(text),
            ast::Quantity::Prompt(text) => self.resolver.resolve_prompt(text),
        }
    }
}

impl<'a, V: Resolver, R: Roller> AstVisitor<'a> for RollContext<V, R> {
    type Output = ResultBuilder;

    fn visit_pool(&mut self, pool: &ast::Pool<'a>) -> Self::Output {
        let parts: Vec<_> = pool.rolls.iter().map(|roll| roll.accept(self)).collect();
        let mut ret = ResultBuilder::new();
        ret.merge_all(parts).set_roll_string(pool.text);
        ret
    }

    fn visit_repeat(&mut self, repeat: &ast::Repeat<'a>) -> Self::Output {
        let count = self.quantity(&repeat.count);
        let mut ret = ResultBuilder::new();
        // Each iteration re-evaluates the subtree with fresh draws; a
        // non-positive count rolls nothing.
        for _ in 0..count {
            let part = repeat.unit.accept(self);
            ret.merge(part);
        }
        ret.set_roll_string(repeat.text);
        ret
    }

    fn visit_group(&mut self, group: &ast::Group<'a>) -> Self::Output {
        let inner = self.visit_pool(&group.pool);
        let name = group.name.strip_suffix(':').unwrap_or(group.name);
        let mut ret = ResultBuilder::new();
        ret.add_group(name, inner).set_roll_string(group.text);
        ret
    }

    fn visit_die(&mut self, die: &ast::DieNode<'a>) -> Self::Output {
        let mut ret = ResultBuilder::new();
        ret.set_roll_string(die.text).roll(die.kind, &mut self.roller);
        ret
    }

    fn visit_symbol(&mut self, symbol: &ast::SymbolNode<'a>) -> Self::Output {
        let mut ret = ResultBuilder::new();
        ret.set_roll_string(symbol.text).add_symbol(symbol.kind);
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceKind;
    use crate::roll::{FnResolver, StepRoller};
    use crate::symbol::ResultKind;

    fn ones() -> impl Resolver {
        FnResolver::new(|_| 1, |_| 1, |_| 1)
    }

    fn eval_with<V: Resolver, R: Roller>(s: &str, resolver: V, roller: R) -> RollResult {
        let pool = crate::parse::parse(s).unwrap();
        RollContext::new(resolver, roller).eval(s, &pool)
    }

    fn eval(s: &str) -> RollResult {
        // Cycling draws keep the outcomes deterministic without pinning
        // every face to the same value.
        eval_with(s, ones(), StepRoller::new(1, 1))
    }

    #[test]
    fn test_repeat_rolls_the_die_count_times() {
        let result = eval("3b");
        assert_eq!(result.rolls().len(), 3);
        assert_eq!(result.dice_results(DiceKind::Boost).len(), 3);
    }

    #[test]
    fn test_pinned_force_dice_come_up_dark() {
        let result = eval_with("2y", ones(), StepRoller::new(1, 0));
        assert_eq!(result.tally().dark, 2);
        assert_eq!(result.tally().light, 0);
        assert_eq!(result.rolls().len(), 2);
        for roll in result.rolls() {
            assert_eq!(roll.die, DiceKind::Force);
            assert_eq!(roll.face, ResultKind::Dark);
        }
    }

    #[test]
    fn test_symbol_literal_injects_without_drawing() {
        let result = eval("success dark");
        assert_eq!(result.tally().success, 1);
        assert_eq!(result.tally().dark, 1);
        assert_eq!(result.rolls()[0].die, DiceKind::None);
        assert_eq!(result.dice_results(DiceKind::None).len(), 2);
    }

    #[test]
    fn test_group_is_addressable_and_flattened() {
        let result = eval_with("(hit: 2y)", ones(), StepRoller::new(1, 0));
        let hit = result.group("hit").expect("group should be captured");
        assert_eq!(hit.rolls().len(), 2);
        assert_eq!(hit.tally().dark, 2);
        assert_eq!(result.rolls(), hit.rolls());
        assert_eq!(result.tally().dark, 2);
    }

    #[test]
    fn test_nested_groups_are_not_promoted() {
        let result = eval("(outer: b (inner: s))");
        let outer = result.group("outer").unwrap();
        assert!(result.group("inner").is_none());
        assert!(outer.group("inner").is_some());
        assert_eq!(result.rolls().len(), 2);
        assert_eq!(outer.rolls().len(), 2);
        assert_eq!(outer.group("inner").unwrap().rolls().len(), 1);
    }

    #[test]
    fn test_quantity_comes_from_the_matching_resolver() {
        let resolver = FnResolver::new(
            |text: &str| {
                assert_eq!(text, "$ranks");
                3
            },
            |_: &str| panic!("no property in this roll"),
            |_: &str| panic!("no prompt in this roll"),
        );
        let result = eval_with("$ranks b", resolver, StepRoller::new(1, 1));
        assert_eq!(result.dice_results(DiceKind::Boost).len(), 3);
    }

    #[test]
    fn test_prompt_receives_the_full_token_text() {
        let resolver = FnResolver::new(
            |_: &str| 1,
            |_: &str| 1,
            |text: &str| {
                assert_eq!(text, "${?whats the value}");
                2
            },
        );
        let result = eval_with("${?whats the value}f", resolver, StepRoller::new(1, 0));
        assert_eq!(result.dice_results(DiceKind::Force).len(), 2);
    }

    #[test]
    fn test_non_positive_count_rolls_nothing() {
        let resolver = FnResolver::new(|_| -2, |_| 0, |_| 1);
        let result = eval_with("$neg b @zero c", resolver, StepRoller::new(1, 1));
        assert!(result.rolls().is_empty());
        assert!(result.tally().is_zero());
    }

    #[test]
    fn test_overflowing_literal_falls_back_to_one() {
        let result = eval("99999999999b");
        assert_eq!(result.rolls().len(), 1);
    }

    #[test]
    fn test_repeated_parens_expand_the_whole_sequence() {
        let result = eval("3(b s)");
        assert_eq!(result.rolls().len(), 6);
        assert_eq!(result.dice_results(DiceKind::Boost).len(), 3);
        assert_eq!(result.dice_results(DiceKind::Setback).len(), 3);
    }

    #[test]
    fn test_resolver_is_consulted_once_per_repetition_node() {
        let mut calls = 0;
        let resolver = FnResolver::new(
            |_: &str| {
                calls += 1;
                2
            },
            |_: &str| 1,
            |_: &str| 1,
        );
        let result = eval_with("$x b $x s", resolver, StepRoller::new(1, 1));
        assert_eq!(result.rolls().len(), 4);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_root_roll_string_is_the_original_input() {
        let result = eval("2b  (hit: s)");
        assert_eq!(result.roll_string(), "2b  (hit: s)");
    }
}
