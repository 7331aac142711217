use super::{Expr, Type};
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

/// A formal parameter of a [`Func`](super::Func).
///
/// Every call to [`Param::new`] mints a new identity. Two parameters are the
/// same parameter only if they share that identity; the name is used for
/// display and diagnostics only.
#[derive(Clone)]
pub struct Param {
    id: ParamId,
    name: Arc<str>,
    ty: Type,
}

/// Process-unique identity of a [`Param`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(u64);

static NEXT_PARAM_ID: AtomicU64 = AtomicU64::new(0);

impl ParamId {
    fn next() -> ParamId {
        ParamId(NEXT_PARAM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Param {
    pub fn new(name: impl Into<Arc<str>>, ty: impl Into<Type>) -> Param {
        Param {
            id: ParamId::next(),
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn id(&self) -> ParamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns an expression referencing this parameter.
    pub fn to_expr(&self) -> Expr {
        Expr::arg(self)
    }

    /// A new parameter with the same name and type but a distinct identity.
    pub(crate) fn fresh(&self) -> Param {
        Param {
            id: ParamId::next(),
            name: self.name.clone(),
            ty: self.ty.clone(),
        }
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Param {}

impl Hash for Param {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id.0)
    }
}
