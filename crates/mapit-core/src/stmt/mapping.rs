use super::{Compiled, Func, Value};
use crate::Result;
use by_address::ByAddress;
use std::{fmt, sync::Arc};

/// A mapping definition: the function AST handed to query backends plus an
/// optional compiled form for mapping records already in memory.
///
/// Mappings are immutable and cheap to clone. Two mappings are equal when
/// they share the same AST allocation.
#[derive(Clone)]
pub struct Mapping {
    func: ByAddress<Arc<Func>>,
    compiled: Option<Compiled>,
}

impl Mapping {
    /// A mapping carrying both forms.
    pub fn new(func: impl Into<Arc<Func>>, compiled: Compiled) -> Mapping {
        Mapping {
            func: ByAddress(func.into()),
            compiled: Some(compiled),
        }
    }

    /// An AST-only mapping. In memory it is run by interpreting the AST.
    pub fn from_func(func: impl Into<Arc<Func>>) -> Mapping {
        Mapping {
            func: ByAddress(func.into()),
            compiled: None,
        }
    }

    /// The AST form, for use with query backends.
    pub fn func(&self) -> &Arc<Func> {
        &self.func
    }

    /// The compiled form, if one was supplied or built.
    pub fn compiled(&self) -> Option<&Compiled> {
        self.compiled.as_ref()
    }

    /// Maps a single record in memory.
    pub fn call(&self, row: &Value) -> Result<Value> {
        let args = std::slice::from_ref(row);
        match &self.compiled {
            Some(compiled) => compiled.call(args),
            None => self.func.call(args),
        }
    }

    /// Maps every record of an in-memory collection.
    pub fn map_all<'a>(&self, rows: impl IntoIterator<Item = &'a Value>) -> Result<Vec<Value>> {
        rows.into_iter().map(|row| self.call(row)).collect()
    }
}

impl AsRef<Func> for Mapping {
    fn as_ref(&self) -> &Func {
        &self.func
    }
}

impl From<Mapping> for Arc<Func> {
    fn from(value: Mapping) -> Self {
        value.func.0
    }
}

impl From<&Mapping> for Arc<Func> {
    fn from(value: &Mapping) -> Self {
        value.func.0.clone()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.func == other.func
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("func", &*self.func)
            .field("compiled", &self.compiled.is_some())
            .finish()
    }
}
