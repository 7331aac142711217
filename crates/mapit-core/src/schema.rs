mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldId, FieldPrimitive, FieldTy};

mod model;
pub use model::{Model, ModelId};

mod relation;
pub use relation::{BelongsTo, HasMany, HasOne};

use indexmap::IndexMap;

/// The set of source entities and target models mappings are written against.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a field by ID
    #[track_caller]
    pub fn field(&self, id: FieldId) -> &Field {
        self.get_field(id).expect("invalid field ID")
    }

    pub fn get_field(&self, id: FieldId) -> Option<&Field> {
        self.get_model(id.model)?.fields.get(id.index)
    }

    /// Find a model by name.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models().find(|model| model.name == name)
    }
}
