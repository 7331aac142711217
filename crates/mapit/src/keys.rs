use crate::NullableKey;
use mapit_core::{
    schema::{BelongsTo, FieldId, FieldTy},
    Schema,
};
use std::sync::Arc;

/// Finds the surrogate key field that can be null-checked in place of a
/// navigation field.
///
/// Query backends translate `parent.owner_id IS NULL` reliably where a null
/// check on the `parent.owner` reference itself is not, so the composer
/// guards inlined mappings on the key field this returns.
pub trait NavigationKeys: Send + Sync {
    fn nullable_key(&self, navigation: FieldId) -> NullableKey;
}

/// Uses the declared `BelongsTo` foreign key, falling back to a sibling
/// field named `<navigation>_id`.
impl NavigationKeys for Schema {
    fn nullable_key(&self, navigation: FieldId) -> NullableKey {
        let Some(field) = self.get_field(navigation) else {
            return NullableKey::NONE;
        };

        let key = match &field.ty {
            FieldTy::BelongsTo(BelongsTo {
                foreign_key: Some(foreign_key),
                ..
            }) => self.get_field(*foreign_key),
            FieldTy::BelongsTo(_) | FieldTy::HasOne(_) => self
                .get_model(navigation.model)
                .and_then(|model| model.field_by_name(&format!("{}_id", field.name))),
            // A collection has no single key to test.
            FieldTy::HasMany(_) | FieldTy::Primitive(_) => None,
        };

        match key {
            Some(key) if key.ty.is_primitive() => NullableKey {
                field: Some(key.id),
                nullable: key.is_nullable_id(),
            },
            _ => NullableKey::NONE,
        }
    }
}

impl<T: NavigationKeys + ?Sized> NavigationKeys for Arc<T> {
    fn nullable_key(&self, navigation: FieldId) -> NullableKey {
        (**self).nullable_key(navigation)
    }
}
