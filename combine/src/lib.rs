// The product of two object algebras: one pass over the builder produces
// both interpretations side by side, without either algebra knowing about
// the other.

use algebra::{ExprAlgebra, ExprAlgebraExt};

/// An algebra over `(A::Repr, B::Repr)`.
///
/// Every call goes to `first` and then to `second`; each half of a pair is
/// only ever handed back to the algebra that made it. If `first` panics the
/// call stops there and `second` is never consulted for it.
///
/// Multiplication is available only when both halves support it:
///
/// ```compile_fail,E0277
/// use algebra::{create_test_expr_ext, EvalAlgebra, PrintAlgebra};
/// use combine::combine;
///
/// create_test_expr_ext(&combine(EvalAlgebra, PrintAlgebra));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Combine<A, B> {
    first: A,
    second: B,
}

impl<A, B> Combine<A, B> {
    pub fn new(first: A, second: B) -> Combine<A, B> {
        Combine { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

pub fn combine<A: ExprAlgebra, B: ExprAlgebra>(first: A, second: B) -> Combine<A, B> {
    Combine::new(first, second)
}

impl<A: ExprAlgebra, B: ExprAlgebra> ExprAlgebra for Combine<A, B> {
    type Repr = (A::Repr, B::Repr);

    fn literal(&self, n: i64) -> Self::Repr {
        let t = self.first.literal(n);
        let u = self.second.literal(n);
        (t, u)
    }

    fn add(&self, (a1, a2): &Self::Repr, (b1, b2): &Self::Repr) -> Self::Repr {
        let t = self.first.add(a1, b1);
        let u = self.second.add(a2, b2);
        (t, u)
    }
}

impl<A: ExprAlgebraExt, B: ExprAlgebraExt> ExprAlgebraExt for Combine<A, B> {
    fn mult(&self, (a1, a2): &Self::Repr, (b1, b2): &Self::Repr) -> Self::Repr {
        let t = self.first.mult(a1, b1);
        let u = self.second.mult(a2, b2);
        (t, u)
    }
}
