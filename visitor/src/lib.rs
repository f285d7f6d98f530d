// Expressions as a closed set of nodes, with operations written as visitors.
// A new operation is just a new visitor; a new kind of node would need a new
// method on `Visitor`, breaking every existing visitor.

#[derive(Debug, Clone)]
pub struct Literal {
    pub n: i64,
}

#[derive(Debug, Clone)]
pub struct Add {
    pub a: Box<Expr>,
    pub b: Box<Expr>,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Literal),
    Add(Add),
}

impl Expr {
    pub fn literal(n: i64) -> Expr {
        Expr::Literal(Literal { n })
    }

    pub fn add(a: Expr, b: Expr) -> Expr {
        Expr::Add(Add {
            a: Box::new(a),
            b: Box::new(b),
        })
    }

    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &V) -> V::Output {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Add(add) => visitor.visit_add(add),
        }
    }
}

pub trait Visitor {
    type Output;

    fn visit_literal(&self, literal: &Literal) -> Self::Output;
    fn visit_add(&self, add: &Add) -> Self::Output;
}

pub struct EvalVisitor;

impl Visitor for EvalVisitor {
    type Output = i64;

    fn visit_literal(&self, literal: &Literal) -> i64 {
        literal.n
    }

    fn visit_add(&self, add: &Add) -> i64 {
        add.a.accept(self) + add.b.accept(self)
    }
}

/// Renders without parentheses, the same way `algebra::PrintAlgebra` does.
pub struct StringifyVisitor;

impl Visitor for StringifyVisitor {
    type Output = String;

    fn visit_literal(&self, literal: &Literal) -> String {
        literal.n.to_string()
    }

    fn visit_add(&self, add: &Add) -> String {
        format!("{} + {}", add.a.accept(self), add.b.accept(self))
    }
}

/// 1 + (2 + 3)
pub fn create_test_expr() -> Expr {
    Expr::add(
        Expr::literal(1),
        Expr::add(Expr::literal(2), Expr::literal(3)),
    )
}
