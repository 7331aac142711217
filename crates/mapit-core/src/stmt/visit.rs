#![allow(unused_variables)]

use super::{
    Expr, ExprArg, ExprBinaryOp, ExprCall, ExprCond, ExprField, ExprInclude, ExprIsNull,
    ExprList, ExprMap, ExprRecord, Func, IncludeSource, Value,
};

pub trait Visit {
    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        visit_expr_arg(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_call(&mut self, i: &ExprCall) {
        visit_expr_call(self, i);
    }

    fn visit_expr_cond(&mut self, i: &ExprCond) {
        visit_expr_cond(self, i);
    }

    fn visit_expr_field(&mut self, i: &ExprField) {
        visit_expr_field(self, i);
    }

    fn visit_expr_include(&mut self, i: &ExprInclude) {
        visit_expr_include(self, i);
    }

    fn visit_expr_is_null(&mut self, i: &ExprIsNull) {
        visit_expr_is_null(self, i);
    }

    fn visit_expr_list(&mut self, i: &ExprList) {
        visit_expr_list(self, i);
    }

    fn visit_expr_map(&mut self, i: &ExprMap) {
        visit_expr_map(self, i);
    }

    fn visit_expr_record(&mut self, i: &ExprRecord) {
        visit_expr_record(self, i);
    }

    fn visit_func(&mut self, i: &Func) {
        visit_func(self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        visit_value(self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Arg(expr) => v.visit_expr_arg(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Call(expr) => v.visit_expr_call(expr),
        Expr::Cond(expr) => v.visit_expr_cond(expr),
        Expr::Field(expr) => v.visit_expr_field(expr),
        Expr::Include(expr) => v.visit_expr_include(expr),
        Expr::IsNull(expr) => v.visit_expr_is_null(expr),
        Expr::List(expr) => v.visit_expr_list(expr),
        Expr::Map(expr) => v.visit_expr_map(expr),
        Expr::Record(expr) => v.visit_expr_record(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_arg<V>(v: &mut V, node: &ExprArg)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_call<V>(v: &mut V, node: &ExprCall)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.func);
    for expr in &node.args {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_cond<V>(v: &mut V, node: &ExprCond)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.cond);
    v.visit_expr(&node.then);
    v.visit_expr(&node.otherwise);
}

pub fn visit_expr_field<V>(v: &mut V, node: &ExprField)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.base);
}

pub fn visit_expr_include<V>(v: &mut V, node: &ExprInclude)
where
    V: Visit + ?Sized,
{
    match &node.source {
        IncludeSource::Entity(entity) => v.visit_expr(entity),
        IncludeSource::Navigation { parent, selector } => {
            v.visit_expr(parent);
            v.visit_func(selector);
        }
    }
    v.visit_expr(&node.mapping);
}

pub fn visit_expr_is_null<V>(v: &mut V, node: &ExprIsNull)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_list<V>(v: &mut V, node: &ExprList)
where
    V: Visit + ?Sized,
{
    for expr in &node.items {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_map<V>(v: &mut V, node: &ExprMap)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.base);
    v.visit_func(&node.map);
}

pub fn visit_expr_record<V>(v: &mut V, node: &ExprRecord)
where
    V: Visit + ?Sized,
{
    for expr in &node.fields {
        v.visit_expr(expr);
    }
}

pub fn visit_func<V>(v: &mut V, node: &Func)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.body);
}

pub fn visit_value<V>(v: &mut V, node: &Value)
where
    V: Visit + ?Sized,
{
}
