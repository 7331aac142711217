use super::Expr;
use crate::schema::ModelId;

/// Constructs an instance of `model`; `fields[i]` initializes the model's
/// field with index `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprRecord {
    pub model: ModelId,
    pub fields: Vec<Expr>,
}

impl Expr {
    pub fn record<T>(model: ModelId, fields: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        ExprRecord {
            model,
            fields: fields.into_iter().map(Into::into).collect(),
        }
        .into()
    }
}

impl From<ExprRecord> for Expr {
    fn from(value: ExprRecord) -> Self {
        Self::Record(value)
    }
}
