use std::{fmt::Display, rc::Rc};

use crate::{ExprAlgebra, ExprAlgebraExt};

/// A deferred rendering of an expression.
#[derive(Clone)]
pub struct PrintExpr {
    print: Rc<dyn Fn() -> String>,
}

impl PrintExpr {
    pub fn new(print: impl Fn() -> String + 'static) -> PrintExpr {
        PrintExpr {
            print: Rc::new(print),
        }
    }

    pub fn print(&self) -> String {
        (self.print)()
    }
}

impl Display for PrintExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.print().fmt(f)
    }
}

/// Renders expressions as text. Operators are written infix with single
/// spaces around them, and nesting is never parenthesized, so
/// `1 + (2 + 3)` prints as `1 + 2 + 3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintAlgebra;

impl PrintAlgebra {
    fn infix(a: &PrintExpr, op: &'static str, b: &PrintExpr) -> PrintExpr {
        let (a, b) = (a.clone(), b.clone());
        PrintExpr::new(move || format!("{} {op} {}", a.print(), b.print()))
    }
}

impl ExprAlgebra for PrintAlgebra {
    type Repr = PrintExpr;

    fn literal(&self, n: i64) -> PrintExpr {
        PrintExpr::new(move || n.to_string())
    }

    fn add(&self, a: &PrintExpr, b: &PrintExpr) -> PrintExpr {
        PrintAlgebra::infix(a, "+", b)
    }
}

impl ExprAlgebraExt for PrintAlgebra {
    fn mult(&self, a: &PrintExpr, b: &PrintExpr) -> PrintExpr {
        PrintAlgebra::infix(a, "*", b)
    }
}
