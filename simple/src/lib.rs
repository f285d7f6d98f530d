// Expressions as objects: every node knows how to evaluate itself.
// A new kind of node is easy to add (see `ext`), a new operation is not:
// it would have to be added to `Expr` and to every node.

use std::rc::Rc;

pub mod ext;

pub trait Expr {
    fn eval(&self) -> i64;
}

#[derive(Debug, Clone, Copy)]
pub struct Literal {
    pub n: i64,
}

impl Literal {
    pub fn new(n: i64) -> Literal {
        Literal { n }
    }
}

impl Expr for Literal {
    fn eval(&self) -> i64 {
        self.n
    }
}

#[derive(Clone)]
pub struct Add {
    pub a: Rc<dyn Expr>,
    pub b: Rc<dyn Expr>,
}

impl Add {
    pub fn new(a: Rc<dyn Expr>, b: Rc<dyn Expr>) -> Add {
        Add { a, b }
    }
}

impl Expr for Add {
    fn eval(&self) -> i64 {
        self.a.eval() + self.b.eval()
    }
}

/// 1 + (2 + 3)
pub fn create_test_expr() -> Rc<dyn Expr> {
    Rc::new(Add::new(
        Rc::new(Literal::new(1)),
        Rc::new(Add::new(Rc::new(Literal::new(2)), Rc::new(Literal::new(3)))),
    ))
}
