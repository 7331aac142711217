use super::{BinaryOp, Expr, ExprInclude, Func, IncludeSource, Param, Value, ValueRecord};
use crate::{schema::FieldId, Error, Result};
use std::cmp::Ordering;

enum ScopeStack<'a> {
    Root,
    Scope {
        params: &'a [Param],
        args: &'a [Value],
        parent: &'a ScopeStack<'a>,
    },
}

impl Func {
    /// Interprets the function against in-memory arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        self.call_ref(&ScopeStack::Root, args)
    }

    fn call_ref(&self, scope: &ScopeStack<'_>, args: &[Value]) -> Result<Value> {
        if args.len() != self.params.len() {
            return Err(Error::arity_mismatch(self.params.len(), args.len()));
        }

        let scope = scope.scope(&self.params, args);
        self.body.eval_ref(&scope)
    }
}

impl Expr {
    /// Evaluates a closed expression.
    ///
    /// Fails with an unbound expression error if the expression references
    /// any parameter.
    pub fn eval_const(&self) -> Result<Value> {
        self.eval_ref(&ScopeStack::Root)
    }

    /// Evaluates the expression with `params` bound to `args`.
    pub fn eval(&self, params: &[Param], args: &[Value]) -> Result<Value> {
        if args.len() != params.len() {
            return Err(Error::arity_mismatch(params.len(), args.len()));
        }

        self.eval_ref(&ScopeStack::Root.scope(params, args))
    }

    fn eval_ref(&self, scope: &ScopeStack<'_>) -> Result<Value> {
        match self {
            Expr::Arg(expr_arg) => match scope.resolve(&expr_arg.param) {
                Some(value) => Ok(value.clone()),
                None => Err(Error::unbound_expression(expr_arg.param.name())),
            },
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval_ref(scope)?;
                let rhs = expr_binary_op.rhs.eval_ref(scope)?;
                binary_op(expr_binary_op.op, &lhs, &rhs)
            }
            Expr::Call(expr_call) => {
                let func = expr_call.func.eval_ref(scope)?;
                let args = expr_call
                    .args
                    .iter()
                    .map(|arg| arg.eval_ref(scope))
                    .collect::<Result<Vec<_>>>()?;
                func.apply(&args)
            }
            Expr::Cond(expr_cond) => {
                if expr_cond.cond.eval_ref(scope)?.to_bool()? {
                    expr_cond.then.eval_ref(scope)
                } else {
                    expr_cond.otherwise.eval_ref(scope)
                }
            }
            Expr::Field(expr_field) => {
                let base = expr_field.base.eval_ref(scope)?;
                project_field(base, expr_field.field)
            }
            Expr::Include(expr_include) => expr_include.eval_ref(scope),
            Expr::IsNull(expr_is_null) => {
                let is_null = expr_is_null.expr.eval_ref(scope)?.is_null();
                Ok((is_null != expr_is_null.negate).into())
            }
            Expr::List(expr_list) => {
                let mut ret = vec![];

                for expr in &expr_list.items {
                    ret.push(expr.eval_ref(scope)?);
                }

                Ok(Value::List(ret))
            }
            Expr::Map(expr_map) => {
                let items = match expr_map.base.eval_ref(scope)? {
                    Value::List(items) => items,
                    other => {
                        return Err(Error::expression_evaluation_failed(format!(
                            "Map base must evaluate to a list, found {}",
                            other.kind_name()
                        )))
                    }
                };

                let mut ret = Vec::with_capacity(items.len());

                for item in items {
                    ret.push(expr_map.map.call_ref(scope, &[item])?);
                }

                Ok(Value::List(ret))
            }
            Expr::Record(expr_record) => {
                let mut fields = Vec::with_capacity(expr_record.fields.len());

                for expr in &expr_record.fields {
                    fields.push(expr.eval_ref(scope)?);
                }

                Ok(ValueRecord::from_vec(fields).into())
            }
            Expr::Value(value) => Ok(value.clone()),
        }
    }
}

impl ExprInclude {
    fn eval_ref(&self, scope: &ScopeStack<'_>) -> Result<Value> {
        let entity = match &self.source {
            IncludeSource::Entity(entity) => entity.eval_ref(scope)?,
            IncludeSource::Navigation { parent, selector } => {
                let parent = parent.eval_ref(scope)?;
                if parent.is_null() {
                    return Ok(Value::Null);
                }
                selector.call_ref(scope, &[parent])?
            }
        };

        if entity.is_null() {
            return Ok(Value::Null);
        }

        self.resolve()?.call(&entity)
    }
}

impl Value {
    /// Invokes a function or mapping value.
    pub fn apply(&self, args: &[Value]) -> Result<Value> {
        match self {
            Value::Func(func) => func.call(args),
            Value::Mapping(mapping) => match args {
                [row] => mapping.call(row),
                _ => Err(Error::arity_mismatch(1, args.len())),
            },
            other => Err(Error::expression_evaluation_failed(format!(
                "cannot call a value of kind {}",
                other.kind_name()
            ))),
        }
    }
}

impl<'a> ScopeStack<'a> {
    fn resolve(&self, param: &Param) -> Option<&Value> {
        let mut scope = self;

        loop {
            match scope {
                ScopeStack::Root => return None,
                ScopeStack::Scope {
                    params,
                    args,
                    parent,
                } => {
                    if let Some(position) = params.iter().position(|p| p == param) {
                        return args.get(position);
                    }
                    scope = *parent;
                }
            }
        }
    }

    fn scope<'child>(
        &'child self,
        params: &'child [Param],
        args: &'child [Value],
    ) -> ScopeStack<'child> {
        ScopeStack::Scope {
            params,
            args,
            parent: self,
        }
    }
}

pub(super) fn project_field(base: Value, field: FieldId) -> Result<Value> {
    match base {
        Value::Record(mut record) => match record.fields.get_mut(field.index) {
            Some(value) => Ok(value.take()),
            None => Err(Error::expression_evaluation_failed(format!(
                "record has no field {field:?}"
            ))),
        },
        Value::Null => Err(Error::expression_evaluation_failed(format!(
            "null dereference reading field {field:?}"
        ))),
        other => Err(Error::expression_evaluation_failed(format!(
            "cannot read field {field:?} of a value of kind {}",
            other.kind_name()
        ))),
    }
}

pub(super) fn binary_op(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value> {
    Ok(match op {
        BinaryOp::Eq => (lhs == rhs).into(),
        BinaryOp::Ne => (lhs != rhs).into(),
        BinaryOp::Ge => (cmp_ordered(lhs, rhs)? != Ordering::Less).into(),
        BinaryOp::Gt => (cmp_ordered(lhs, rhs)? == Ordering::Greater).into(),
        BinaryOp::Le => (cmp_ordered(lhs, rhs)? != Ordering::Greater).into(),
        BinaryOp::Lt => (cmp_ordered(lhs, rhs)? == Ordering::Less).into(),
    })
}

fn cmp_ordered(lhs: &Value, rhs: &Value) -> Result<Ordering> {
    match (lhs, rhs) {
        (Value::I32(lhs), Value::I32(rhs)) => Ok(lhs.cmp(rhs)),
        (Value::I64(lhs), Value::I64(rhs)) => Ok(lhs.cmp(rhs)),
        (Value::I32(lhs), Value::I64(rhs)) => Ok(i64::from(*lhs).cmp(rhs)),
        (Value::I64(lhs), Value::I32(rhs)) => Ok(lhs.cmp(&i64::from(*rhs))),
        (Value::String(lhs), Value::String(rhs)) => Ok(lhs.cmp(rhs)),
        _ => Err(Error::expression_evaluation_failed(format!(
            "cannot order {} and {}",
            lhs.kind_name(),
            rhs.kind_name()
        ))),
    }
}
