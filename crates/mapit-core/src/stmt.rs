mod bind;

mod compile;
pub use compile::Compiled;

mod eval;

mod expr;
pub use expr::Expr;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_call;
pub use expr_call::ExprCall;

mod expr_cond;
pub use expr_cond::ExprCond;

mod expr_field;
pub use expr_field::ExprField;

mod expr_include;
pub use expr_include::{ExprInclude, IncludeKind, IncludeSource, IncludeTarget};

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_list;
pub use expr_list::ExprList;

mod expr_map;
pub use expr_map::ExprMap;

mod expr_record;
pub use expr_record::ExprRecord;

mod func;
pub use func::Func;

mod infer;

mod mapping;
pub use mapping::Mapping;

mod op_binary;
pub use op_binary::BinaryOp;

mod param;
pub use param::{Param, ParamId};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
