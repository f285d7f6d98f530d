// A new node kind, added without touching anything in the parent module.

use std::rc::Rc;

use crate::{Add, Expr, Literal};

#[derive(Clone)]
pub struct Mult {
    pub a: Rc<dyn Expr>,
    pub b: Rc<dyn Expr>,
}

impl Mult {
    pub fn new(a: Rc<dyn Expr>, b: Rc<dyn Expr>) -> Mult {
        Mult { a, b }
    }
}

impl Expr for Mult {
    fn eval(&self) -> i64 {
        self.a.eval() * self.b.eval()
    }
}

/// 4 * (5 + 6)
pub fn create_test_expr_ext() -> Rc<dyn Expr> {
    Rc::new(Mult::new(
        Rc::new(Literal::new(4)),
        Rc::new(Add::new(Rc::new(Literal::new(5)), Rc::new(Literal::new(6)))),
    ))
}
