use super::Expr;

/// `if cond { then } else { otherwise }`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCond {
    pub cond: Box<Expr>,
    pub then: Box<Expr>,
    pub otherwise: Box<Expr>,
}

impl Expr {
    pub fn cond(
        cond: impl Into<Self>,
        then: impl Into<Self>,
        otherwise: impl Into<Self>,
    ) -> Self {
        ExprCond {
            cond: Box::new(cond.into()),
            then: Box::new(then.into()),
            otherwise: Box::new(otherwise.into()),
        }
        .into()
    }
}

impl From<ExprCond> for Expr {
    fn from(value: ExprCond) -> Self {
        Self::Cond(value)
    }
}
