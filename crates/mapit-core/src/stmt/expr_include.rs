use super::{Expr, Func, Mapping, Type, Value};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// Marker that references another mapping for a one-to-one relation.
///
/// Composition replaces the marker with the referenced mapping's body, bound
/// to the related entity. Evaluated directly (outside composition), the
/// marker maps the related entity with the referenced mapping, or yields null
/// when there is no related entity.
///
/// # Examples
///
/// ```text
/// include(target.type_a, map_type_a)               // IncludeSource::Entity
/// include(target, |t| t.type_a, map_type_a)        // IncludeSource::Navigation
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInclude {
    /// How the mapping argument is expected to resolve.
    pub kind: IncludeKind,

    /// Where the related entity comes from.
    pub source: IncludeSource,

    /// Closed expression evaluating to the referenced mapping.
    pub mapping: Box<Expr>,

    /// The type the marker evaluates to.
    pub ty: Type,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    /// The mapping argument is a function AST (a [`Mapping`] is narrowed to
    /// its AST).
    Ast,

    /// The mapping argument is a [`Mapping`]; its compiled form is used when
    /// the marker runs in memory.
    Compiled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IncludeSource {
    /// The related entity itself, usually `parent.navigation`.
    Entity(Box<Expr>),

    /// A parent entity and a selector lambda picking the related entity.
    Navigation { parent: Box<Expr>, selector: Box<Func> },
}

/// The mapping an include marker resolved to.
#[derive(Debug, Clone)]
pub enum IncludeTarget {
    Func(Arc<Func>),
    Mapping(Mapping),
}

impl Expr {
    /// References a function AST (or the AST of a [`Mapping`]).
    pub fn include(entity: impl Into<Self>, mapping: impl Into<Self>, ty: impl Into<Type>) -> Self {
        ExprInclude {
            kind: IncludeKind::Ast,
            source: IncludeSource::Entity(Box::new(entity.into())),
            mapping: Box::new(mapping.into()),
            ty: ty.into(),
        }
        .into()
    }

    /// References a [`Mapping`], using its compiled form in memory.
    pub fn include_mapping(
        entity: impl Into<Self>,
        mapping: impl Into<Self>,
        ty: impl Into<Type>,
    ) -> Self {
        ExprInclude {
            kind: IncludeKind::Compiled,
            source: IncludeSource::Entity(Box::new(entity.into())),
            mapping: Box::new(mapping.into()),
            ty: ty.into(),
        }
        .into()
    }

    /// References a mapping for the entity `selector` picks from `parent`.
    pub fn include_navigation(
        kind: IncludeKind,
        parent: impl Into<Self>,
        selector: Func,
        mapping: impl Into<Self>,
        ty: impl Into<Type>,
    ) -> Self {
        ExprInclude {
            kind,
            source: IncludeSource::Navigation {
                parent: Box::new(parent.into()),
                selector: Box::new(selector),
            },
            mapping: Box::new(mapping.into()),
            ty: ty.into(),
        }
        .into()
    }

    pub fn as_include(&self) -> Option<&ExprInclude> {
        match self {
            Self::Include(expr_include) => Some(expr_include),
            _ => None,
        }
    }
}

impl ExprInclude {
    /// Evaluates the mapping argument and checks it against the marker kind.
    pub fn resolve(&self) -> Result<IncludeTarget> {
        let value = self.mapping.eval_const().map_err(|err| {
            err.context(Error::unresolved_marker_argument(
                "mapping argument must not depend on the mapped record",
            ))
        })?;

        match (self.kind, value) {
            (IncludeKind::Ast, Value::Func(func)) => Ok(IncludeTarget::Func(func)),
            (IncludeKind::Ast, Value::Mapping(mapping)) => {
                Ok(IncludeTarget::Func(mapping.func().clone()))
            }
            (IncludeKind::Compiled, Value::Mapping(mapping)) => Ok(IncludeTarget::Mapping(mapping)),
            (kind, value) => Err(Error::unresolved_marker_argument(format!(
                "{kind:?} include expects a {}, found {}",
                match kind {
                    IncludeKind::Ast => "function or mapping",
                    IncludeKind::Compiled => "mapping",
                },
                value.kind_name()
            ))),
        }
    }

    /// The expression producing the related entity.
    ///
    /// For the navigation shape this binds the selector to the parent.
    pub fn entity(&self) -> Result<Expr> {
        match &self.source {
            IncludeSource::Entity(entity) => Ok((**entity).clone()),
            IncludeSource::Navigation { parent, selector } => {
                selector.bind_body([Some((**parent).clone())])
            }
        }
    }

    /// Evaluates the closed arguments of the marker, keyed by argument name.
    ///
    /// Fails if any argument depends on a parameter.
    pub fn extract_arguments(&self) -> Result<IndexMap<&'static str, Value>> {
        let mut args = IndexMap::new();

        match &self.source {
            IncludeSource::Entity(entity) => {
                args.insert("entity", entity.eval_const()?);
            }
            IncludeSource::Navigation { parent, selector } => {
                args.insert("parent", parent.eval_const()?);
                args.insert("selector", Value::Func(Arc::new((**selector).clone())));
            }
        }

        args.insert("mapping", self.mapping.eval_const()?);
        Ok(args)
    }
}

impl IncludeTarget {
    /// The AST form of the resolved mapping.
    pub fn func(&self) -> &Arc<Func> {
        match self {
            IncludeTarget::Func(func) => func,
            IncludeTarget::Mapping(mapping) => mapping.func(),
        }
    }

    /// Maps one entity in memory.
    pub fn call(&self, entity: &Value) -> Result<Value> {
        match self {
            IncludeTarget::Func(func) => func.call(std::slice::from_ref(entity)),
            IncludeTarget::Mapping(mapping) => mapping.call(entity),
        }
    }
}

impl From<ExprInclude> for Expr {
    fn from(value: ExprInclude) -> Self {
        Self::Include(value)
    }
}
