use crate::{
    schema::Schema,
    stmt::{Expr, ExprCall, ExprCond, ExprList, Func, Type, Value},
};

impl Expr {
    /// Infers the type the expression evaluates to.
    ///
    /// Inference is best effort: shapes it cannot see through (records built
    /// from constants, calls to non-constant functions) yield
    /// [`Type::Unknown`], which is assignable to and from every type.
    pub fn infer_ty(&self, schema: &Schema) -> Type {
        match self {
            Expr::Arg(expr_arg) => expr_arg.param.ty().clone(),
            Expr::BinaryOp(_) | Expr::IsNull(_) => Type::Bool,
            Expr::Call(expr_call) => expr_call.infer_ty(schema),
            Expr::Cond(expr_cond) => expr_cond.infer_ty(schema),
            Expr::Field(expr_field) => match schema.get_field(expr_field.field) {
                Some(field) => field.expr_ty(),
                None => Type::Unknown,
            },
            Expr::Include(expr_include) => expr_include.ty.clone(),
            Expr::List(expr_list) => expr_list.infer_ty(schema),
            Expr::Map(expr_map) => Type::list(expr_map.map.body.infer_ty(schema)),
            Expr::Record(expr_record) => Type::Model(expr_record.model),
            Expr::Value(value) => value.infer_ty(),
        }
    }
}

impl Func {
    /// The type of the function's result.
    pub fn infer_ret_ty(&self, schema: &Schema) -> Type {
        self.body.infer_ty(schema)
    }
}

impl ExprCall {
    fn infer_ty(&self, schema: &Schema) -> Type {
        // Only constant callees can be looked through.
        match &*self.func {
            Expr::Value(Value::Func(func)) => func.infer_ret_ty(schema),
            Expr::Value(Value::Mapping(mapping)) => mapping.func().infer_ret_ty(schema),
            _ => Type::Unknown,
        }
    }
}

impl ExprCond {
    fn infer_ty(&self, schema: &Schema) -> Type {
        // A null branch says nothing about the type; prefer the other one.
        match self.then.infer_ty(schema) {
            Type::Null => self.otherwise.infer_ty(schema),
            ty => ty,
        }
    }
}

impl ExprList {
    fn infer_ty(&self, schema: &Schema) -> Type {
        match self.items.first() {
            Some(item) => Type::list(item.infer_ty(schema)),
            None => Type::list(Type::Unknown),
        }
    }
}
