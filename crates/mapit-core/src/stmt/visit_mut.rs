#![allow(unused_variables)]

use super::{
    Expr, ExprArg, ExprBinaryOp, ExprCall, ExprCond, ExprField, ExprInclude, ExprIsNull,
    ExprList, ExprMap, ExprRecord, Func, IncludeSource, Value,
};

pub trait VisitMut {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        visit_expr_mut(self, i);
    }

    fn visit_expr_arg_mut(&mut self, i: &mut ExprArg) {
        visit_expr_arg_mut(self, i);
    }

    fn visit_expr_binary_op_mut(&mut self, i: &mut ExprBinaryOp) {
        visit_expr_binary_op_mut(self, i);
    }

    fn visit_expr_call_mut(&mut self, i: &mut ExprCall) {
        visit_expr_call_mut(self, i);
    }

    fn visit_expr_cond_mut(&mut self, i: &mut ExprCond) {
        visit_expr_cond_mut(self, i);
    }

    fn visit_expr_field_mut(&mut self, i: &mut ExprField) {
        visit_expr_field_mut(self, i);
    }

    fn visit_expr_include_mut(&mut self, i: &mut ExprInclude) {
        visit_expr_include_mut(self, i);
    }

    fn visit_expr_is_null_mut(&mut self, i: &mut ExprIsNull) {
        visit_expr_is_null_mut(self, i);
    }

    fn visit_expr_list_mut(&mut self, i: &mut ExprList) {
        visit_expr_list_mut(self, i);
    }

    fn visit_expr_map_mut(&mut self, i: &mut ExprMap) {
        visit_expr_map_mut(self, i);
    }

    fn visit_expr_record_mut(&mut self, i: &mut ExprRecord) {
        visit_expr_record_mut(self, i);
    }

    fn visit_func_mut(&mut self, i: &mut Func) {
        visit_func_mut(self, i);
    }

    fn visit_value_mut(&mut self, i: &mut Value) {
        visit_value_mut(self, i);
    }
}

pub fn visit_expr_mut<V>(v: &mut V, node: &mut Expr)
where
    V: VisitMut + ?Sized,
{
    match node {
        Expr::Arg(expr) => v.visit_expr_arg_mut(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op_mut(expr),
        Expr::Call(expr) => v.visit_expr_call_mut(expr),
        Expr::Cond(expr) => v.visit_expr_cond_mut(expr),
        Expr::Field(expr) => v.visit_expr_field_mut(expr),
        Expr::Include(expr) => v.visit_expr_include_mut(expr),
        Expr::IsNull(expr) => v.visit_expr_is_null_mut(expr),
        Expr::List(expr) => v.visit_expr_list_mut(expr),
        Expr::Map(expr) => v.visit_expr_map_mut(expr),
        Expr::Record(expr) => v.visit_expr_record_mut(expr),
        Expr::Value(expr) => v.visit_value_mut(expr),
    }
}

pub fn visit_expr_arg_mut<V>(v: &mut V, node: &mut ExprArg)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_binary_op_mut<V>(v: &mut V, node: &mut ExprBinaryOp)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.lhs);
    v.visit_expr_mut(&mut node.rhs);
}

pub fn visit_expr_call_mut<V>(v: &mut V, node: &mut ExprCall)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.func);
    for expr in &mut node.args {
        v.visit_expr_mut(expr);
    }
}

pub fn visit_expr_cond_mut<V>(v: &mut V, node: &mut ExprCond)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.cond);
    v.visit_expr_mut(&mut node.then);
    v.visit_expr_mut(&mut node.otherwise);
}

pub fn visit_expr_field_mut<V>(v: &mut V, node: &mut ExprField)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.base);
}

pub fn visit_expr_include_mut<V>(v: &mut V, node: &mut ExprInclude)
where
    V: VisitMut + ?Sized,
{
    match &mut node.source {
        IncludeSource::Entity(entity) => v.visit_expr_mut(entity),
        IncludeSource::Navigation { parent, selector } => {
            v.visit_expr_mut(parent);
            v.visit_func_mut(selector);
        }
    }
    v.visit_expr_mut(&mut node.mapping);
}

pub fn visit_expr_is_null_mut<V>(v: &mut V, node: &mut ExprIsNull)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_expr_list_mut<V>(v: &mut V, node: &mut ExprList)
where
    V: VisitMut + ?Sized,
{
    for expr in &mut node.items {
        v.visit_expr_mut(expr);
    }
}

pub fn visit_expr_map_mut<V>(v: &mut V, node: &mut ExprMap)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.base);
    v.visit_func_mut(&mut node.map);
}

pub fn visit_expr_record_mut<V>(v: &mut V, node: &mut ExprRecord)
where
    V: VisitMut + ?Sized,
{
    for expr in &mut node.fields {
        v.visit_expr_mut(expr);
    }
}

pub fn visit_func_mut<V>(v: &mut V, node: &mut Func)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.body);
}

pub fn visit_value_mut<V>(v: &mut V, node: &mut Value)
where
    V: VisitMut + ?Sized,
{
}
