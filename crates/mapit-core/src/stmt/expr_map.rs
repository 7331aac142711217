use super::{Expr, Func};

/// Collection projection: applies `map` to each item of the list `base`
/// evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMap {
    /// Expression to map
    pub base: Box<Expr>,

    /// Single-parameter lambda applied to each item
    pub map: Box<Func>,
}

impl Expr {
    pub fn map(base: impl Into<Self>, map: Func) -> Self {
        ExprMap {
            base: Box::new(base.into()),
            map: Box::new(map),
        }
        .into()
    }
}

impl From<ExprMap> for Expr {
    fn from(value: ExprMap) -> Self {
        Self::Map(value)
    }
}
