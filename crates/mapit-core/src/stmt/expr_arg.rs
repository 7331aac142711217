use super::{Expr, Param};

/// A reference to a function parameter.
///
/// Resolution is by the parameter's identity, so two parameters that happen
/// to share a name are never confused.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprArg {
    pub param: Param,
}

impl Expr {
    pub fn arg(param: &Param) -> Self {
        Self::Arg(ExprArg {
            param: param.clone(),
        })
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
