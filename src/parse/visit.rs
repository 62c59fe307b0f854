use crate::parse::ast;

pub trait AstVisitor<'a> {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<'a, Self>,
    {
        node.accept(self)
    }

    fn visit_pool(&mut self, pool: &ast::Pool<'a>) -> Self::Output;

    fn visit_repeat(&mut self, repeat: &ast::Repeat<'a>) -> Self::Output;

    fn visit_group(&mut self, group: &ast::Group<'a>) -> Self::Output;

    fn visit_die(&mut self, die: &ast::DieNode<'a>) -> Self::Output;

    fn visit_symbol(&mut self, symbol: &ast::SymbolNode<'a>) -> Self::Output;
}

pub trait Accept<'a, V: AstVisitor<'a> + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<'a, V: AstVisitor<'a> + ?Sized> Accept<'a, V> for ast::Pool<'a> {
    fn accept(&self, v: &mut V) -> V::Output {
        v.visit_pool(self)
    }
}

impl<'a, V: AstVisitor<'a> + ?Sized> Accept<'a, V> for ast::Node<'a> {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Pool(x) => v.visit_pool(x),
            Self::Repeat(x) => v.visit_repeat(x),
            Self::Group(x) => v.visit_group(x),
            Self::Die(x) => v.visit_die(x),
            Self::Symbol(x) => v.visit_symbol(x),
        }
    }
}
