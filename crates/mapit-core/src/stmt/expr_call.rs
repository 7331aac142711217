use super::{Expr, Value};
use crate::Result;

/// Invokes a function value.
///
/// `func` must evaluate to a [`Value::Func`] or [`Value::Mapping`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub func: Box<Expr>,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn call(func: impl Into<Self>, args: impl IntoIterator<Item = impl Into<Self>>) -> Self {
        ExprCall {
            func: Box::new(func.into()),
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl ExprCall {
    /// Evaluates every argument ahead of time.
    ///
    /// Fails if any argument depends on a parameter.
    pub fn extract_arguments(&self) -> Result<Vec<Value>> {
        self.args.iter().map(Expr::eval_const).collect()
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
