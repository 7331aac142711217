use super::*;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a function parameter
    Arg(ExprArg),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// Invoke a function value with arguments
    Call(ExprCall),

    /// If / then / else
    Cond(ExprCond),

    /// Member access on a record
    Field(ExprField),

    /// Marker that inlines another mapping during composition
    Include(ExprInclude),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how query backends treat null comparisons.
    IsNull(ExprIsNull),

    /// A list of expressions of the same type
    List(ExprList),

    /// Apply a lambda to each item in a list
    Map(ExprMap),

    /// Construct a model record
    Record(ExprRecord),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Returns `true` if an include marker appears anywhere in the
    /// expression.
    pub fn contains_include(&self) -> bool {
        struct FindInclude(bool);

        impl Visit for FindInclude {
            fn visit_expr(&mut self, i: &Expr) {
                if !self.0 {
                    visit::visit_expr(self, i);
                }
            }

            fn visit_expr_include(&mut self, _i: &ExprInclude) {
                self.0 = true;
            }
        }

        let mut find = FindInclude(false);
        find.visit_expr(self);
        find.0
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Value(Value::Null))
    }
}

impl Func {
    /// Returns `true` if an include marker appears anywhere in the body.
    pub fn contains_include(&self) -> bool {
        self.body.contains_include()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_from_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value!(bool, i32, i64, &str, String, Func, Arc<Func>, Mapping, &Mapping);

impl From<&Param> for Expr {
    fn from(value: &Param) -> Self {
        Self::arg(value)
    }
}
