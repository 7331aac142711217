use super::{Composer, NullGuard};
use crate::{NavigationKeys, NullableKeyCache};
use mapit_core::Schema;
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Cache shared with other composers. A fresh one is created when unset.
    cache: Option<Arc<NullableKeyCache>>,

    /// Key lookup. Defaults to the schema.
    keys: Option<Arc<dyn NavigationKeys>>,

    null_guard: NullGuard,
}

impl Builder {
    /// Shares `cache` with the composer being built.
    ///
    /// Only share a cache between composers using the same key lookup.
    pub fn cache(&mut self, cache: Arc<NullableKeyCache>) -> &mut Self {
        self.cache = Some(cache);
        self
    }

    /// Replaces the schema-backed key lookup.
    pub fn keys(&mut self, keys: impl NavigationKeys + 'static) -> &mut Self {
        self.keys = Some(Arc::new(keys));
        self
    }

    pub fn null_guard(&mut self, null_guard: NullGuard) -> &mut Self {
        self.null_guard = null_guard;
        self
    }

    pub fn build(&mut self, schema: impl Into<Arc<Schema>>) -> Composer {
        let schema = schema.into();

        let keys = match &self.keys {
            Some(keys) => keys.clone(),
            None => schema.clone() as Arc<dyn NavigationKeys>,
        };

        Composer {
            schema,
            keys,
            cache: self.cache.clone().unwrap_or_default(),
            null_guard: self.null_guard,
        }
    }
}
