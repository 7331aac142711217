mod builder;
pub use builder::Builder;

use crate::{NavigationKeys, NullableKeyCache};
use log::debug;
use mapit_core::{
    stmt::{visit_mut, Expr, ExprInclude, Func, Mapping, VisitMut},
    Error, Result, Schema,
};
use std::{fmt, sync::Arc};

/// Flattens mappings that reference other mappings into a single,
/// self-contained function.
///
/// Each include marker is replaced by the referenced mapping's body with its
/// parameter bound to the related entity. Inlined bodies are composed in
/// turn, so the result contains no markers however deep the references go.
/// When the related entity can be absent, the inlined body is guarded on the
/// entity's surrogate key:
///
/// ```text
/// include(order.customer, map_customer)
///
/// // becomes
/// if is_not_null(order.customer_id) {
///     Customer { name: order.customer.name, .. }
/// } else {
///     null
/// }
/// ```
///
/// A composer holds no per-call state and may be shared between threads.
pub struct Composer {
    schema: Arc<Schema>,

    /// Finds the key field to null check for a navigation field.
    keys: Arc<dyn NavigationKeys>,

    /// Memoized `keys` lookups.
    cache: Arc<NullableKeyCache>,

    null_guard: NullGuard,
}

/// How inlined mappings are protected against an absent related entity.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NullGuard {
    /// Guard on the navigation's nullable surrogate key, when one exists.
    /// Navigations without one are inlined unguarded.
    #[default]
    SurrogateKey,

    /// Never guard.
    Disabled,
}

/// Rewrites include markers in place. The first error stops the pass.
struct Inline<'a> {
    composer: &'a Composer,
    error: Option<Error>,
}

impl Composer {
    /// A composer using the schema's declared keys and a private cache.
    pub fn new(schema: impl Into<Arc<Schema>>) -> Composer {
        Composer::builder().build(schema)
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn cache(&self) -> &Arc<NullableKeyCache> {
        &self.cache
    }

    pub fn null_guard(&self) -> NullGuard {
        self.null_guard
    }

    /// Builds a mapping from `func`.
    ///
    /// The mapping's AST is the composed function. Its compiled form is
    /// compiled from `func` as written, so includes run the referenced
    /// mappings' own compiled forms.
    pub fn compose(&self, func: Func) -> Result<Mapping> {
        let composed = self.compose_func(&func)?;
        let compiled = func.compile()?;
        Ok(Mapping::new(composed, compiled))
    }

    /// Returns `func` with every include marker inlined.
    ///
    /// A function without markers is returned unchanged.
    pub fn compose_func(&self, func: &Func) -> Result<Func> {
        let mut func = func.clone();

        let mut inline = Inline {
            composer: self,
            error: None,
        };
        inline.visit_func_mut(&mut func);

        match inline.error {
            Some(err) => Err(err),
            None => Ok(func),
        }
    }

    fn inline(&self, expr_include: &ExprInclude) -> Result<Expr> {
        let entity = expr_include.entity()?;
        let target = expr_include.resolve()?;
        let func = target.func();

        if func.arity() != 1 {
            return Err(Error::arity_mismatch(1, func.arity()));
        }

        let guard = self.null_guard_subject(&entity);
        let body = func.bind_body([Some(entity)])?;

        let ty = body.infer_ty(&self.schema);
        if !expr_include.ty.is_assignable_from(&ty) {
            return Err(Error::type_mismatch(expr_include.ty.clone(), ty));
        }

        debug!(
            "inlining include; kind={:?} ty={:?} guard={:?}",
            expr_include.kind, expr_include.ty, guard
        );

        Ok(match guard {
            Some(subject) => Expr::cond(Expr::is_not_null(subject), body, Expr::null()),
            None => body,
        })
    }

    /// `parent.<key>` when `entity` is `parent.<navigation>` and the
    /// navigation has a nullable surrogate key.
    fn null_guard_subject(&self, entity: &Expr) -> Option<Expr> {
        if self.null_guard == NullGuard::Disabled {
            return None;
        }

        let expr_field = entity.as_field()?;
        let key = self
            .cache
            .get_or_compute(expr_field.field, |navigation| {
                self.keys.nullable_key(navigation)
            })
            .guard_field()?;

        Some(Expr::field((*expr_field.base).clone(), key))
    }
}

impl VisitMut for Inline<'_> {
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        if self.error.is_some() {
            return;
        }

        let Expr::Include(expr_include) = expr else {
            visit_mut::visit_expr_mut(self, expr);
            return;
        };

        match self.composer.inline(expr_include) {
            Ok(mut inlined) => {
                // The referenced mapping may include others.
                self.visit_expr_mut(&mut inlined);
                *expr = inlined;
            }
            Err(err) => self.error = Some(err),
        }
    }
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("cache", &self.cache)
            .field("null_guard", &self.null_guard)
            .finish_non_exhaustive()
    }
}
