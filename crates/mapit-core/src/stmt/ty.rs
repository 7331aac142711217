use crate::schema::ModelId;

/// An expression type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// An instance of a model
    Model(ModelId),

    /// A list of a single type
    List(Box<Type>),

    /// A function AST or mapping
    Func,

    /// The null type can be assigned to any type.
    Null,

    /// A type that could not be inferred (e.g., empty list)
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }

    /// Returns `true` if a value of type `other` may stand where `self` is
    /// expected. `Null` fits anywhere and `Unknown` matches everything.
    pub fn is_assignable_from(&self, other: &Type) -> bool {
        match (self, other) {
            (Self::Unknown, _) | (_, Self::Unknown) | (_, Self::Null) => true,
            (Self::List(lhs), Self::List(rhs)) => lhs.is_assignable_from(rhs),
            (lhs, rhs) => lhs == rhs,
        }
    }
}

impl From<ModelId> for Type {
    fn from(value: ModelId) -> Self {
        Self::Model(value)
    }
}
