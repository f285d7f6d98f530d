// Object algebras: an abstract factory for expressions, parameterized over
// the representation it builds. New interpretations are new implementors;
// new expression forms are new capability traits layered on top.
//
// See https://oleksandrmanzyuk.wordpress.com/2014/06/18/from-object-algebras-to-finally-tagless-interpreters-2/

use std::rc::Rc;

mod eval;
mod print;

pub use eval::{EvalAlgebra, EvalAlgebraExt, EvalExpr};
pub use print::{PrintAlgebra, PrintExpr};

/// The base language: integer literals and addition.
pub trait ExprAlgebra {
    /// What this algebra builds for each expression.
    type Repr;

    fn literal(&self, n: i64) -> Self::Repr;
    fn add(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr;
}

/// The base language extended with multiplication.
///
/// Adding a form means adding a trait, never touching `ExprAlgebra`.
pub trait ExprAlgebraExt: ExprAlgebra {
    fn mult(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr;
}

// an algebra behind a pointer is still the same algebra

impl<A: ExprAlgebra + ?Sized> ExprAlgebra for &A {
    type Repr = A::Repr;

    fn literal(&self, n: i64) -> Self::Repr {
        (**self).literal(n)
    }
    fn add(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr {
        (**self).add(a, b)
    }
}

impl<A: ExprAlgebraExt + ?Sized> ExprAlgebraExt for &A {
    fn mult(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr {
        (**self).mult(a, b)
    }
}

impl<A: ExprAlgebra + ?Sized> ExprAlgebra for Rc<A> {
    type Repr = A::Repr;

    fn literal(&self, n: i64) -> Self::Repr {
        (**self).literal(n)
    }
    fn add(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr {
        (**self).add(a, b)
    }
}

impl<A: ExprAlgebraExt + ?Sized> ExprAlgebraExt for Rc<A> {
    fn mult(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr {
        (**self).mult(a, b)
    }
}

impl<A: ExprAlgebra + ?Sized> ExprAlgebra for Box<A> {
    type Repr = A::Repr;

    fn literal(&self, n: i64) -> Self::Repr {
        (**self).literal(n)
    }
    fn add(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr {
        (**self).add(a, b)
    }
}

impl<A: ExprAlgebraExt + ?Sized> ExprAlgebraExt for Box<A> {
    fn mult(&self, a: &Self::Repr, b: &Self::Repr) -> Self::Repr {
        (**self).mult(a, b)
    }
}

/// Builds `1 + (2 + 3)` with any algebra.
pub fn create_test_expr<A: ExprAlgebra + ?Sized>(factory: &A) -> A::Repr {
    factory.add(
        &factory.literal(1),
        &factory.add(&factory.literal(2), &factory.literal(3)),
    )
}

/// Builds `4 * (5 + 6)`. Only algebras that know about multiplication are
/// accepted:
///
/// ```
/// use algebra::{create_test_expr_ext, EvalAlgebraExt};
///
/// assert_eq!(create_test_expr_ext(&EvalAlgebraExt::default()).eval(), 44);
/// ```
///
/// A base algebra is turned away by the type checker:
///
/// ```compile_fail,E0277
/// use algebra::{create_test_expr_ext, EvalAlgebra};
///
/// create_test_expr_ext(&EvalAlgebra);
/// ```
pub fn create_test_expr_ext<A: ExprAlgebraExt + ?Sized>(factory: &A) -> A::Repr {
    factory.mult(
        &factory.literal(4),
        &factory.add(&factory.literal(5), &factory.literal(6)),
    )
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use crate::{create_test_expr, create_test_expr_ext, ExprAlgebra, ExprAlgebraExt};

    // an algebra that builds plain syntax, to check the call shape of the builders
    struct Shape;

    impl ExprAlgebra for Shape {
        type Repr = String;

        fn literal(&self, n: i64) -> String {
            n.to_string()
        }
        fn add(&self, a: &String, b: &String) -> String {
            format!("Add({a}, {b})")
        }
    }

    impl ExprAlgebraExt for Shape {
        fn mult(&self, a: &String, b: &String) -> String {
            format!("Mult({a}, {b})")
        }
    }

    #[test]
    fn test_expr_shape() {
        insta::assert_snapshot!(create_test_expr(&Shape), @"Add(1, Add(2, 3))")
    }

    #[test]
    fn test_expr_ext_shape() {
        insta::assert_snapshot!(create_test_expr_ext(&Shape), @"Mult(4, Add(5, 6))")
    }

    #[test]
    fn pointers_are_algebras() {
        let shared = Rc::new(Shape);
        let boxed: Box<dyn ExprAlgebraExt<Repr = String>> = Box::new(Shape);

        assert_eq!(create_test_expr(&&Shape), "Add(1, Add(2, 3))");
        assert_eq!(create_test_expr(&shared), "Add(1, Add(2, 3))");
        assert_eq!(create_test_expr_ext(&boxed), "Mult(4, Add(5, 6))");
    }

    #[test]
    fn trait_objects_are_algebras() {
        let dynamic: &dyn ExprAlgebra<Repr = String> = &Shape;
        assert_eq!(create_test_expr(dynamic), "Add(1, Add(2, 3))");
    }
}
