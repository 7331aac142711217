use super::{FieldId, ModelId};

/// A one-to-one reference whose key lives on the declaring model.
#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Model the relation points to
    pub target: ModelId,

    /// The primitive field on the declaring model holding the target's id,
    /// when one was declared.
    pub foreign_key: Option<FieldId>,
}

/// A one-to-one reference whose key lives on the target model.
#[derive(Debug, Clone)]
pub struct HasOne {
    pub target: ModelId,
}

#[derive(Debug, Clone)]
pub struct HasMany {
    pub target: ModelId,
}

impl From<BelongsTo> for super::FieldTy {
    fn from(value: BelongsTo) -> Self {
        Self::BelongsTo(value)
    }
}

impl From<HasOne> for super::FieldTy {
    fn from(value: HasOne) -> Self {
        Self::HasOne(value)
    }
}

impl From<HasMany> for super::FieldTy {
    fn from(value: HasMany) -> Self {
        Self::HasMany(value)
    }
}
