use super::{BelongsTo, HasMany, HasOne, ModelId};
use crate::stmt;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: String,

    /// Primitive or relation
    pub ty: FieldTy,

    /// True if the field can hold null.
    pub nullable: bool,
}

/// Identifies a field: the declaring model plus the field's position in the
/// model's records.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    BelongsTo(BelongsTo),
    HasOne(HasOne),
    HasMany(HasMany),
}

#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    /// The field's primitive type
    pub ty: stmt::Type,
}

impl Field {
    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }

    /// The type a member access of this field evaluates to.
    pub fn expr_ty(&self) -> stmt::Type {
        match &self.ty {
            FieldTy::Primitive(primitive) => primitive.ty.clone(),
            FieldTy::BelongsTo(belongs_to) => stmt::Type::Model(belongs_to.target),
            FieldTy::HasOne(has_one) => stmt::Type::Model(has_one.target),
            FieldTy::HasMany(has_many) => stmt::Type::list(stmt::Type::Model(has_many.target)),
        }
    }

    /// Returns `true` for a nullable field holding a numeric identifier.
    pub fn is_nullable_id(&self) -> bool {
        self.nullable && matches!(&self.ty, FieldTy::Primitive(p) if p.ty.is_numeric())
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(..))
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::BelongsTo(..) | Self::HasOne(..) | Self::HasMany(..))
    }

    #[track_caller]
    pub fn expect_belongs_to(&self) -> &BelongsTo {
        match self {
            Self::BelongsTo(belongs_to) => belongs_to,
            _ => panic!("expected field to be `BelongsTo`, but was {self:#?}"),
        }
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => ty.fmt(fmt),
            Self::BelongsTo(ty) => ty.fmt(fmt),
            Self::HasOne(ty) => ty.fmt(fmt),
            Self::HasMany(ty) => ty.fmt(fmt),
        }
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}

impl From<FieldPrimitive> for FieldTy {
    fn from(value: FieldPrimitive) -> Self {
        Self::Primitive(value)
    }
}
