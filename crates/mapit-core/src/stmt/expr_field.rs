use super::Expr;
use crate::schema::FieldId;

/// Member access: reads `field` from the record `base` evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub base: Box<Expr>,
    pub field: FieldId,
}

impl Expr {
    pub fn field(base: impl Into<Self>, field: FieldId) -> Self {
        ExprField {
            base: Box::new(base.into()),
            field,
        }
        .into()
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Self::Field(expr_field) => Some(expr_field),
            _ => None,
        }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
