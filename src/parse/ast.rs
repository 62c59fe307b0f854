use crate::dice::DiceKind;
use crate::symbol::ResultKind;

/// A sequence of one or more roll expressions, evaluated left to right.
///
/// Every node carries the slice of source text it was parsed from; the
/// evaluator uses it as the node's roll-string fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Pool<'a> {
    pub rolls: Vec<Node<'a>>,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// A parenthesized, unnamed sequence.
    Pool(Pool<'a>),
    /// `N <unit>`: the unit evaluated `N` times.
    Repeat(Repeat<'a>),
    /// `(name: <pool>)`: a named capture group.
    Group(Group<'a>),
    /// A single die token; one draw.
    Die(DieNode<'a>),
    /// A symbol literal; no draw.
    Symbol(SymbolNode<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Repeat<'a> {
    pub count: Quantity<'a>,
    pub unit: Box<Node<'a>>,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    /// The raw group-name token, trailing `:` included.
    pub name: &'a str,
    pub pool: Pool<'a>,
    pub text: &'a str,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DieNode<'a> {
    pub kind: DiceKind,
    pub text: &'a str,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SymbolNode<'a> {
    pub kind: ResultKind,
    pub text: &'a str,
}

/// How a repetition count is written. Each variant holds the matched token
/// text, sigils included; resolution happens at evaluation time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Quantity<'a> {
    Literal(&'a str),
    Variable(&'a str),
    Property(&'a str),
    Prompt(&'a str),
}
