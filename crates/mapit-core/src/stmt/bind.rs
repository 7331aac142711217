use super::{visit_mut, Expr, Func, Param, ParamId, VisitMut};
use crate::{Error, Result};
use std::collections::HashMap;

impl Func {
    /// Substitutes the function's parameters with the given expressions.
    ///
    /// Replacements are positional and there must be exactly one per
    /// parameter. A `None` replacement leaves that parameter open: it stays a
    /// parameter of the returned function, in its original order.
    ///
    /// ```
    /// # use mapit_core::stmt::{Expr, Func, Param, Type, Value};
    /// let x = Param::new("x", Type::I64);
    /// let y = Param::new("y", Type::I64);
    /// let lt = Func::new(vec![x.clone(), y.clone()], Expr::lt(&x, &y));
    ///
    /// let lt_ten = lt.bind([None, Some(Expr::from(10i64))]).unwrap();
    /// assert_eq!(lt_ten.params, vec![x]);
    /// assert_eq!(lt_ten.call(&[Value::I64(3)]).unwrap(), Value::Bool(true));
    /// ```
    pub fn bind(&self, replacements: impl IntoIterator<Item = Option<Expr>>) -> Result<Func> {
        let (mut bind, params) = Bind::new(&self.params, replacements)?;
        let mut body = self.body.clone();
        bind.visit_expr_mut(&mut body);
        Ok(Func { params, body })
    }

    /// Like [`Func::bind`], returning only the rewritten body.
    ///
    /// Parameters given a `None` replacement remain as free references in
    /// the returned expression.
    pub fn bind_body(&self, replacements: impl IntoIterator<Item = Option<Expr>>) -> Result<Expr> {
        Ok(self.bind(replacements)?.body)
    }
}

/// Replaces parameter references by identity.
struct Bind {
    replacements: HashMap<ParamId, Expr>,
}

impl Bind {
    fn new(
        params: &[Param],
        replacements: impl IntoIterator<Item = Option<Expr>>,
    ) -> Result<(Bind, Vec<Param>)> {
        let replacements: Vec<_> = replacements.into_iter().collect();

        if replacements.len() != params.len() {
            return Err(Error::arity_mismatch(params.len(), replacements.len()));
        }

        let mut bind = Bind {
            replacements: HashMap::with_capacity(params.len()),
        };
        let mut open = vec![];

        for (param, replacement) in params.iter().zip(replacements) {
            match replacement {
                Some(replacement) => {
                    bind.replacements.insert(param.id(), replacement);
                }
                None => open.push(param.clone()),
            }
        }

        Ok((bind, open))
    }
}

impl VisitMut for Bind {
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        if let Expr::Arg(expr_arg) = expr {
            if let Some(replacement) = self.replacements.get(&expr_arg.param.id()) {
                // Replacements are inserted as-is and never visited.
                *expr = replacement.clone();
            }
            return;
        }

        visit_mut::visit_expr_mut(self, expr);
    }

    fn visit_func_mut(&mut self, func: &mut Func) {
        // Nested lambdas get fresh parameters so every copy of a bound body
        // owns its binders. The lambda's binders shadow any outer entry for
        // the same identity until its body has been visited.
        let mut shadowed = Vec::with_capacity(func.params.len());

        for param in &mut func.params {
            let fresh = param.fresh();
            let prev = self.replacements.insert(param.id(), Expr::arg(&fresh));
            shadowed.push((param.id(), prev));
            *param = fresh;
        }

        visit_mut::visit_func_mut(self, func);

        for (id, prev) in shadowed.into_iter().rev() {
            match prev {
                Some(prev) => self.replacements.insert(id, prev),
                None => self.replacements.remove(&id),
            };
        }
    }
}
