use super::{BelongsTo, Field, FieldId, FieldPrimitive, FieldTy, HasMany, HasOne, Model, ModelId, Schema};
use crate::{stmt, Error, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Declares models and fields, then validates them into a [`Schema`].
///
/// Identifiers are handed out as soon as a model or field is declared so
/// relations can point at models declared later.
#[derive(Debug, Default)]
pub struct Builder {
    models: IndexMap<ModelId, Model>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Declares a model and returns its identifier.
    pub fn model(&mut self, name: impl Into<String>) -> ModelId {
        let id = ModelId(self.models.len());
        self.models.insert(
            id,
            Model {
                id,
                name: name.into(),
                fields: vec![],
            },
        );
        id
    }

    /// Declares a non-nullable primitive field.
    pub fn field(&mut self, model: ModelId, name: impl Into<String>, ty: stmt::Type) -> FieldId {
        self.push_field(model, name.into(), FieldPrimitive { ty }.into(), false)
    }

    /// Declares a nullable primitive field.
    pub fn nullable_field(
        &mut self,
        model: ModelId,
        name: impl Into<String>,
        ty: stmt::Type,
    ) -> FieldId {
        self.push_field(model, name.into(), FieldPrimitive { ty }.into(), true)
    }

    /// Declares a one-to-one reference keyed on the declaring model.
    ///
    /// The relation is nullable unless its foreign key is a non-nullable
    /// field.
    pub fn belongs_to(
        &mut self,
        model: ModelId,
        name: impl Into<String>,
        target: ModelId,
        foreign_key: Option<FieldId>,
    ) -> FieldId {
        let nullable = foreign_key
            .and_then(|fk| self.declared_field(fk))
            .map(|fk| fk.nullable)
            .unwrap_or(true);

        self.push_field(
            model,
            name.into(),
            BelongsTo {
                target,
                foreign_key,
            }
            .into(),
            nullable,
        )
    }

    pub fn has_one(&mut self, model: ModelId, name: impl Into<String>, target: ModelId) -> FieldId {
        self.push_field(model, name.into(), HasOne { target }.into(), true)
    }

    pub fn has_many(&mut self, model: ModelId, name: impl Into<String>, target: ModelId) -> FieldId {
        self.push_field(model, name.into(), HasMany { target }.into(), false)
    }

    pub fn build(self) -> Result<Schema> {
        let mut model_names = HashSet::new();

        for model in self.models.values() {
            if !model_names.insert(model.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate model `{}`",
                    model.name
                )));
            }

            let mut field_names = HashSet::new();

            for field in &model.fields {
                if !field_names.insert(field.name.as_str()) {
                    return Err(Error::invalid_schema(format!(
                        "duplicate field `{}::{}`",
                        model.name, field.name
                    )));
                }

                self.verify_field(model, field)?;
            }
        }

        Ok(Schema {
            models: self.models,
        })
    }

    fn verify_field(&self, model: &Model, field: &Field) -> Result<()> {
        let target = match &field.ty {
            FieldTy::Primitive(_) => return Ok(()),
            FieldTy::BelongsTo(belongs_to) => {
                if let Some(fk) = belongs_to.foreign_key {
                    let valid = fk.model == model.id
                        && model
                            .fields
                            .get(fk.index)
                            .is_some_and(|fk| fk.ty.is_primitive());

                    if !valid {
                        return Err(Error::invalid_schema(format!(
                            "foreign key of `{}::{}` must be a primitive field of `{}`",
                            model.name, field.name, model.name
                        )));
                    }
                }
                belongs_to.target
            }
            FieldTy::HasOne(has_one) => has_one.target,
            FieldTy::HasMany(has_many) => has_many.target,
        };

        if !self.models.contains_key(&target) {
            return Err(Error::invalid_schema(format!(
                "relation `{}::{}` targets undeclared model {target:?}",
                model.name, field.name
            )));
        }

        Ok(())
    }

    fn declared_field(&self, id: FieldId) -> Option<&Field> {
        self.models.get(&id.model)?.fields.get(id.index)
    }

    #[track_caller]
    fn push_field(&mut self, model: ModelId, name: String, ty: FieldTy, nullable: bool) -> FieldId {
        let model = self
            .models
            .get_mut(&model)
            .expect("field declared on a model from another builder");

        let id = FieldId {
            model: model.id,
            index: model.fields.len(),
        };

        model.fields.push(Field {
            id,
            name,
            ty,
            nullable,
        });

        id
    }
}
