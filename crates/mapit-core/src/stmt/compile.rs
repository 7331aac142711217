use super::{
    eval::{binary_op, project_field},
    Expr, ExprInclude, Func, IncludeSource, IncludeTarget, ParamId, Value, ValueRecord,
};
use crate::{Error, Result};
use std::{fmt, sync::Arc};

/// An executable form of a function.
///
/// Built by [`Func::compile`], which resolves parameters to frame slots and
/// include markers to their target mappings once, or wrapped around a plain
/// Rust closure with [`Compiled::from_fn`].
#[derive(Clone)]
pub struct Compiled {
    arity: usize,
    f: Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>,
}

type Thunk = Box<dyn Fn(&mut Vec<Value>) -> Result<Value> + Send + Sync>;

struct Compiler {
    /// Parameters in scope; a parameter's position is its frame slot.
    slots: Vec<ParamId>,
}

impl Compiled {
    pub fn from_fn<F>(arity: usize, f: F) -> Compiled
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Compiled {
            arity,
            f: Arc::new(f),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.arity {
            return Err(Error::arity_mismatch(self.arity, args.len()));
        }

        (self.f)(args)
    }
}

impl fmt::Debug for Compiled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiled")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl Func {
    /// Compiles the function into a tree of closures.
    ///
    /// Include markers are resolved now and run their target's compiled
    /// form, so nested mappings become ordinary nested calls.
    pub fn compile(&self) -> Result<Compiled> {
        let mut compiler = Compiler {
            slots: self.params.iter().map(|param| param.id()).collect(),
        };

        let body = compiler.expr(&self.body)?;

        Ok(Compiled::from_fn(self.params.len(), move |args| {
            let mut frame = args.to_vec();
            body(&mut frame)
        }))
    }
}

impl IncludeTarget {
    fn compile(self) -> Result<Compiled> {
        let compiled = match self {
            IncludeTarget::Mapping(mapping) => match mapping.compiled() {
                Some(compiled) => compiled.clone(),
                None => mapping.func().compile()?,
            },
            IncludeTarget::Func(func) => func.compile()?,
        };

        if compiled.arity() != 1 {
            return Err(Error::arity_mismatch(1, compiled.arity()));
        }

        Ok(compiled)
    }
}

impl Compiler {
    fn expr(&mut self, expr: &Expr) -> Result<Thunk> {
        Ok(match expr {
            Expr::Arg(expr_arg) => {
                let Some(slot) = self.slots.iter().rposition(|id| *id == expr_arg.param.id())
                else {
                    return Err(Error::unbound_expression(expr_arg.param.name()));
                };
                Box::new(move |frame| Ok(frame[slot].clone()))
            }
            Expr::BinaryOp(expr_binary_op) => {
                let op = expr_binary_op.op;
                let lhs = self.expr(&expr_binary_op.lhs)?;
                let rhs = self.expr(&expr_binary_op.rhs)?;
                Box::new(move |frame| binary_op(op, &lhs(frame)?, &rhs(frame)?))
            }
            Expr::Call(expr_call) => {
                let func = self.expr(&expr_call.func)?;
                let args = self.exprs(&expr_call.args)?;
                Box::new(move |frame| {
                    let func = func(frame)?;
                    let args = eval_all(&args, frame)?;
                    func.apply(&args)
                })
            }
            Expr::Cond(expr_cond) => {
                let cond = self.expr(&expr_cond.cond)?;
                let then = self.expr(&expr_cond.then)?;
                let otherwise = self.expr(&expr_cond.otherwise)?;
                Box::new(move |frame| {
                    if cond(frame)?.to_bool()? {
                        then(frame)
                    } else {
                        otherwise(frame)
                    }
                })
            }
            Expr::Field(expr_field) => {
                let field = expr_field.field;
                let base = self.expr(&expr_field.base)?;
                Box::new(move |frame| project_field(base(frame)?, field))
            }
            Expr::Include(expr_include) => self.include(expr_include)?,
            Expr::IsNull(expr_is_null) => {
                let negate = expr_is_null.negate;
                let expr = self.expr(&expr_is_null.expr)?;
                Box::new(move |frame| Ok((expr(frame)?.is_null() != negate).into()))
            }
            Expr::List(expr_list) => {
                let items = self.exprs(&expr_list.items)?;
                Box::new(move |frame| Ok(Value::List(eval_all(&items, frame)?)))
            }
            Expr::Map(expr_map) => {
                let [param] = &expr_map.map.params[..] else {
                    return Err(Error::arity_mismatch(1, expr_map.map.params.len()));
                };

                let base = self.expr(&expr_map.base)?;

                self.slots.push(param.id());
                let map = self.expr(&expr_map.map.body);
                self.slots.pop();
                let map = map?;

                Box::new(move |frame| {
                    let items = match base(frame)? {
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
                        frame.push(item);
                        let mapped = map(frame);
                        frame.pop();
                        ret.push(mapped?);
                    }

                    Ok(Value::List(ret))
                })
            }
            Expr::Record(expr_record) => {
                let fields = self.exprs(&expr_record.fields)?;
                Box::new(move |frame| Ok(ValueRecord::from_vec(eval_all(&fields, frame)?).into()))
            }
            Expr::Value(value) => {
                let value = value.clone();
                Box::new(move |_| Ok(value.clone()))
            }
        })
    }

    fn exprs(&mut self, exprs: &[Expr]) -> Result<Vec<Thunk>> {
        exprs.iter().map(|expr| self.expr(expr)).collect()
    }

    fn include(&mut self, expr_include: &ExprInclude) -> Result<Thunk> {
        let target = expr_include.resolve()?.compile()?;

        let entity: Thunk = match &expr_include.source {
            IncludeSource::Entity(entity) => self.expr(entity)?,
            IncludeSource::Navigation { parent, selector } => {
                let [param] = &selector.params[..] else {
                    return Err(Error::arity_mismatch(1, selector.params.len()));
                };

                let parent = self.expr(parent)?;

                // The selector may read enclosing parameters, so its body
                // runs inline on the current frame.
                self.slots.push(param.id());
                let selector = self.expr(&selector.body);
                self.slots.pop();
                let selector = selector?;

                Box::new(move |frame| {
                    let parent = parent(frame)?;
                    if parent.is_null() {
                        return Ok(Value::Null);
                    }
                    frame.push(parent);
                    let entity = selector(frame);
                    frame.pop();
                    entity
                })
            }
        };

        Ok(Box::new(move |frame| {
            let entity = entity(frame)?;
            if entity.is_null() {
                Ok(Value::Null)
            } else {
                target.call(&[entity])
            }
        }))
    }
}

fn eval_all(thunks: &[Thunk], frame: &mut Vec<Value>) -> Result<Vec<Value>> {
    thunks.iter().map(|thunk| thunk(frame)).collect()
}
