use super::{Func, Mapping, Type, ValueRecord};
use crate::{Error, Result};
use std::sync::Arc;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// A record; field `i` holds the value of the model's field with index `i`
    Record(ValueRecord),

    /// A list of values of the same type
    List(Vec<Value>),

    /// String value
    String(String),

    /// A function AST
    Func(Arc<Func>),

    /// A mapping definition
    Mapping(Mapping),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            other => Err(Error::expression_evaluation_failed(format!(
                "expected Bool, found {}",
                other.kind_name()
            ))),
        }
    }

    #[track_caller]
    pub fn expect_record(&self) -> &ValueRecord {
        match self {
            Self::Record(record) => record,
            _ => panic!("expected record; actual={self:#?}"),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Variant name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::List(_) => "List",
            Self::String(_) => "String",
            Self::Func(_) => "Func",
            Self::Mapping(_) => "Mapping",
        }
    }

    /// The type of a constant. Records carry no model, so they infer as
    /// [`Type::Unknown`].
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::Null => Type::Null,
            Self::Record(_) => Type::Unknown,
            Self::List(items) => Type::list(
                items
                    .first()
                    .map(Value::infer_ty)
                    .unwrap_or(Type::Unknown),
            ),
            Self::String(_) => Type::String,
            Self::Func(_) | Self::Mapping(_) => Type::Func,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Self::Record(value)
    }
}

impl From<Func> for Value {
    fn from(value: Func) -> Self {
        Self::Func(Arc::new(value))
    }
}

impl From<Arc<Func>> for Value {
    fn from(value: Arc<Func>) -> Self {
        Self::Func(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<&Mapping> for Value {
    fn from(value: &Mapping) -> Self {
        Self::Mapping(value.clone())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}
