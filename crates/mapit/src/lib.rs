mod cache;
pub use cache::{NullableKey, NullableKeyCache};

pub mod compose;
pub use compose::{Composer, NullGuard};

mod keys;
pub use keys::NavigationKeys;

pub use mapit_core::{
    schema,
    stmt::{self, Expr, Func, IncludeKind, Mapping, Param, Type, Value},
    Error, Result, Schema,
};
