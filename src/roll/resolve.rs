use crate::common::Int;

/// External lookups for quantity placeholders. Each method receives the
/// matched token text, sigils included (`$strength`, `@agility`,
/// `${?how many}`), and must produce a count.
///
/// A name the implementation cannot resolve is its own failure domain: it
/// may default, block, or panic, and the evaluator passes that behavior
/// through untouched. Results are never cached; a prompt referenced twice
/// is asked twice.
pub trait Resolver {
    fn resolve_variable(&mut self, text: &str) -> Int;

    fn resolve_property(&mut self, text: &str) -> Int;

    fn resolve_prompt(&mut self, text: &str) -> Int;
}

impl<T: Resolver + ?Sized> Resolver for &mut T {
    fn resolve_variable(&mut self, text: &str) -> Int {
        (**self).resolve_variable(text)
    }

    fn resolve_property(&mut self, text: &str) -> Int {
        (**self).resolve_property(text)
    }

    fn resolve_prompt(&mut self, text: &str) -> Int {
        (**self).resolve_prompt(text)
    }
}

/// Adapts three closures into a [Resolver].
pub struct FnResolver<V, P, Q> {
    variable: V,
    property: P,
    prompt: Q,
}

impl<V, P, Q> FnResolver<V, P, Q>
where
    V: FnMut(&str) -> Int,
    P: FnMut(&str) -> Int,
    Q: FnMut(&str) -> Int,
{
    pub fn new(variable: V, property: P, prompt: Q) -> Self {
        Self {
            variable,
            property,
            prompt,
        }
    }
}

impl<V, P, Q> Resolver for FnResolver<V, P, Q>
where
    V: FnMut(&str) -> Int,
    P: FnMut(&str) -> Int,
    Q: FnMut(&str) -> Int,
{
    fn resolve_variable(&mut self, text: &str) -> Int {
        (self.variable)(text)
    }

    fn resolve_property(&mut self, text: &str) -> Int {
        (self.property)(text)
    }

    fn resolve_prompt(&mut self, text: &str) -> Int {
        (self.prompt)(text)
    }
}
