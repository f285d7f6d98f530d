use std::{fmt::Display, rc::Rc};

use crate::{ExprAlgebra, ExprAlgebraExt};

/// A deferred integer computation. Nothing is computed until `eval` is
/// called, and calling it again recomputes the same value.
#[derive(Clone)]
pub struct EvalExpr {
    eval: Rc<dyn Fn() -> i64>,
}

impl EvalExpr {
    pub fn new(eval: impl Fn() -> i64 + 'static) -> EvalExpr {
        EvalExpr {
            eval: Rc::new(eval),
        }
    }

    pub fn eval(&self) -> i64 {
        (self.eval)()
    }
}

impl Display for EvalExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.eval().fmt(f)
    }
}

/// Interprets expressions as integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalAlgebra;

impl ExprAlgebra for EvalAlgebra {
    type Repr = EvalExpr;

    fn literal(&self, n: i64) -> EvalExpr {
        EvalExpr::new(move || n)
    }

    fn add(&self, a: &EvalExpr, b: &EvalExpr) -> EvalExpr {
        let (a, b) = (a.clone(), b.clone());
        EvalExpr::new(move || a.eval() + b.eval())
    }
}

/// `EvalAlgebra` plus multiplication. Literals and addition are delegated
/// to the wrapped base algebra; only `mult` is new here.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalAlgebraExt {
    base: EvalAlgebra,
}

impl EvalAlgebraExt {
    pub fn new(base: EvalAlgebra) -> EvalAlgebraExt {
        EvalAlgebraExt { base }
    }

    pub fn base(&self) -> &EvalAlgebra {
        &self.base
    }
}

impl ExprAlgebra for EvalAlgebraExt {
    type Repr = EvalExpr;

    fn literal(&self, n: i64) -> EvalExpr {
        self.base.literal(n)
    }

    fn add(&self, a: &EvalExpr, b: &EvalExpr) -> EvalExpr {
        self.base.add(a, b)
    }
}

impl ExprAlgebraExt for EvalAlgebraExt {
    fn mult(&self, a: &EvalExpr, b: &EvalExpr) -> EvalExpr {
        let (a, b) = (a.clone(), b.clone());
        EvalExpr::new(move || a.eval() * b.eval())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        create_test_expr, create_test_expr_ext, EvalAlgebra, EvalAlgebraExt, EvalExpr,
        ExprAlgebra, ExprAlgebraExt,
    };

    #[test]
    fn test_expr() {
        insta::assert_snapshot!(create_test_expr(&EvalAlgebra), @"6")
    }

    #[test]
    fn test_expr_ext() {
        insta::assert_snapshot!(create_test_expr_ext(&EvalAlgebraExt::default()), @"44")
    }

    #[test]
    fn base_expr_with_ext_algebra() {
        assert_eq!(create_test_expr(&EvalAlgebraExt::default()).eval(), 6);
        assert_eq!(create_test_expr(EvalAlgebraExt::new(EvalAlgebra).base()).eval(), 6);
    }

    #[test]
    fn literal_evaluates_to_itself() {
        for n in [0, 1, -1, 42, -1000, i64::MAX, i64::MIN] {
            assert_eq!(EvalAlgebra.literal(n).eval(), n);
        }
    }

    #[test]
    fn add_is_sum_of_operands() {
        let alg = EvalAlgebra;
        let pairs = [
            (alg.literal(3), alg.literal(4)),
            (create_test_expr(&alg), alg.literal(-10)),
        ];

        for (a, b) in pairs {
            assert_eq!(alg.add(&a, &b).eval(), a.eval() + b.eval());
        }
    }

    #[test]
    fn mult_is_product_of_operands() {
        let alg = EvalAlgebraExt::default();
        let a = alg.add(&alg.literal(2), &alg.literal(5));
        let b = alg.literal(-3);

        assert_eq!(alg.mult(&a, &b).eval(), -21);
    }

    #[test]
    fn eval_is_repeatable() {
        let expr = create_test_expr_ext(&EvalAlgebraExt::default());
        assert_eq!(expr.eval(), expr.eval());
    }

    #[test]
    fn shared_subexpression() {
        let alg = EvalAlgebra;
        let x = alg.add(&alg.literal(2), &alg.literal(3));
        let doubled = alg.add(&x, &x);

        assert_eq!(doubled.eval(), 10);
        assert_eq!(x.eval(), 5);
    }

    fn is_send_sync<T: Send + Sync>() {}

    #[test]
    fn algebras_are_thread_safe() {
        is_send_sync::<EvalAlgebra>();
        is_send_sync::<EvalAlgebraExt>();
        is_send_sync::<crate::PrintAlgebra>();
    }

    #[test]
    fn construction_does_not_evaluate() {
        let alg = EvalAlgebra;
        let bomb = EvalExpr::new(|| panic!("evaluated"));

        // building around a failing computation is fine as long as no one evaluates it
        let _ = alg.add(&alg.literal(1), &bomb);
    }

    #[test]
    #[should_panic(expected = "evaluated")]
    fn evaluation_is_deferred_until_eval() {
        let alg = EvalAlgebra;
        let bomb = EvalExpr::new(|| panic!("evaluated"));

        alg.add(&alg.literal(1), &bomb).eval();
    }
}
