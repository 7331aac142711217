use dashmap::DashMap;
use log::trace;
use mapit_core::schema::FieldId;

/// The surrogate key field standing in for a navigation field in null
/// checks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NullableKey {
    /// The sibling key field, if one was found.
    pub field: Option<FieldId>,

    /// True if the key field holds a nullable numeric identifier.
    pub nullable: bool,
}

/// Memoizes [`NullableKey`] lookups by navigation field.
///
/// Entries are computed at most once per key and never evicted. The cache is
/// safe to share between threads and between composers built over the same
/// schema.
#[derive(Debug, Default)]
pub struct NullableKeyCache {
    entries: DashMap<FieldId, NullableKey>,
}

impl NullableKey {
    /// No usable key field.
    pub const NONE: NullableKey = NullableKey {
        field: None,
        nullable: false,
    };

    /// The field a null guard should test, if any.
    pub fn guard_field(&self) -> Option<FieldId> {
        self.field.filter(|_| self.nullable)
    }
}

impl NullableKeyCache {
    pub fn new() -> NullableKeyCache {
        NullableKeyCache::default()
    }

    /// Returns the entry for `navigation`, computing it with `f` on first
    /// use.
    ///
    /// The shard holding the key stays locked while `f` runs, so concurrent
    /// callers for the same key wait for the first one and `f` runs once.
    /// `f` must not access the cache.
    pub fn get_or_compute(
        &self,
        navigation: FieldId,
        f: impl FnOnce(FieldId) -> NullableKey,
    ) -> NullableKey {
        if let Some(entry) = self.entries.get(&navigation) {
            trace!("nullable key cache hit; navigation={navigation:?}");
            return *entry;
        }

        *self.entries.entry(navigation).or_insert_with(|| {
            let entry = f(navigation);
            trace!("nullable key cache miss; navigation={navigation:?} entry={entry:?}");
            entry
        })
    }

    pub fn get(&self, navigation: FieldId) -> Option<NullableKey> {
        self.entries.get(&navigation).map(|entry| *entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
