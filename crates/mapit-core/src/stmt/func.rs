use super::{Expr, Param, Type};
use std::sync::Arc;

/// A function AST: formal parameters plus a body expression.
///
/// Mappings are single-parameter functions from a source entity to a target
/// model. Nested lambdas (e.g. the projection of [`Expr::map`]) are also
/// represented as `Func`.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    pub params: Vec<Param>,
    pub body: Expr,
}

impl Func {
    pub fn new(params: impl Into<Vec<Param>>, body: impl Into<Expr>) -> Func {
        Func {
            params: params.into(),
            body: body.into(),
        }
    }

    /// A single-parameter function.
    pub fn lambda(param: Param, body: impl Into<Expr>) -> Func {
        Func::new(vec![param], body)
    }

    /// Builds a single-parameter function, handing `f` a reference to the
    /// freshly created parameter.
    ///
    /// ```
    /// # use mapit_core::stmt::{Expr, Func, Type};
    /// let identity = Func::from_fn("x", Type::I64, |x| x);
    /// assert_eq!(identity.arity(), 1);
    /// ```
    pub fn from_fn(
        name: impl Into<Arc<str>>,
        ty: impl Into<Type>,
        f: impl FnOnce(Expr) -> Expr,
    ) -> Func {
        let param = Param::new(name, ty);
        let body = f(param.to_expr());
        Func::lambda(param, body)
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
