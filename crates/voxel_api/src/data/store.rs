//! Value containers and stores.
//!
//! [`ValueContainer`] and [`CompositeValueStore`] are object safe and work on
//! type-erased values; the typed, key-driven API lives in the blanket
//! extension traits [`ValueContainerExt`] and [`CompositeValueStoreExt`].

use super::Key;
use crate::error::DataError;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// A type-erased value together with the name of its concrete type.
pub struct RawValue {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl RawValue {
    pub fn new<E: Any + Send + Sync>(value: E) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<E>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }

    /// Recovers the concrete value, handing `self` back on a type mismatch.
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        let type_name = self.type_name;
        self.value
            .downcast::<E>()
            .map(|value| *value)
            .map_err(|value| Self { value, type_name })
    }

    fn is_same_type(&self, other: &RawValue) -> bool {
        (*self.value).type_id() == (*other.value).type_id()
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Read access to keyed data.
pub trait ValueContainer {
    /// The value stored under `key_id`, if any.
    fn raw_value(&self, key_id: &str) -> Option<&dyn Any>;

    /// Ids of every key this container currently supports.
    fn keys(&self) -> Vec<&'static str>;

    fn supports(&self, key_id: &str) -> bool {
        self.keys().contains(&key_id)
    }
}

/// Typed reads through [`Key`]s.
pub trait ValueContainerExt: ValueContainer {
    /// Borrows the value for `key`.
    ///
    /// A stored value of the wrong type is logged and treated as absent.
    fn get_ref<E: Any>(&self, key: &Key<E>) -> Option<&E> {
        let raw = self.raw_value(key.id())?;
        let value = raw.downcast_ref::<E>();
        if value.is_none() {
            warn!(
                "Value stored for key '{}' is not a {}",
                key.id(),
                type_name::<E>()
            );
        }
        value
    }

    fn get<E: Any + Clone>(&self, key: &Key<E>) -> Option<E> {
        self.get_ref(key).cloned()
    }

    fn get_or_else<E: Any + Clone>(&self, key: &Key<E>, default: E) -> E {
        self.get(key).unwrap_or(default)
    }

    fn supports_key<E>(&self, key: &Key<E>) -> bool {
        self.supports(key.id())
    }
}

impl<C: ValueContainer + ?Sized> ValueContainerExt for C {}

/// Whether a data transaction went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransactionKind {
    /// Every value was accepted
    Success,
    /// A value was rejected (unsupported key, out of bounds, not removable)
    Failure,
    /// A value had the wrong type
    Error,
}

/// Outcome of offering or removing data.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTransactionResult {
    kind: TransactionKind,
    keys: Vec<String>,
    replaced: bool,
    error: Option<DataError>,
}

impl DataTransactionResult {
    pub fn success(key: impl Into<String>, replaced: bool) -> Self {
        Self {
            kind: TransactionKind::Success,
            keys: vec![key.into()],
            replaced,
            error: None,
        }
    }

    pub fn failure(key: impl Into<String>, error: DataError) -> Self {
        Self {
            kind: TransactionKind::Failure,
            keys: vec![key.into()],
            replaced: false,
            error: Some(error),
        }
    }

    pub fn error(key: impl Into<String>, error: DataError) -> Self {
        Self {
            kind: TransactionKind::Error,
            keys: vec![key.into()],
            replaced: false,
            error: Some(error),
        }
    }

    /// Folds several results into one: the worst kind wins, keys are
    /// concatenated and the first rejection is kept.
    pub fn combine(results: impl IntoIterator<Item = DataTransactionResult>) -> Self {
        let mut combined = Self {
            kind: TransactionKind::Success,
            keys: Vec::new(),
            replaced: false,
            error: None,
        };
        for result in results {
            combined.kind = combined.kind.max(result.kind);
            combined.keys.extend(result.keys);
            combined.replaced |= result.replaced;
            if combined.error.is_none() {
                combined.error = result.error;
            }
        }
        combined
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// True if a previous value was overwritten or removed.
    pub fn replaced(&self) -> bool {
        self.replaced
    }

    pub fn rejection(&self) -> Option<&DataError> {
        self.error.as_ref()
    }

    pub fn is_successful(&self) -> bool {
        self.kind == TransactionKind::Success
    }
}

/// Write access to keyed data.
pub trait CompositeValueStore: ValueContainer {
    fn offer_raw(&mut self, key_id: &'static str, value: RawValue) -> DataTransactionResult;

    fn remove_raw(&mut self, key_id: &str) -> DataTransactionResult;
}

/// Typed writes through [`Key`]s.
pub trait CompositeValueStoreExt: CompositeValueStore {
    fn offer<E: Any + Send + Sync>(&mut self, key: &Key<E>, value: E) -> DataTransactionResult {
        self.offer_raw(key.id(), RawValue::new(value))
    }

    fn remove<E>(&mut self, key: &Key<E>) -> DataTransactionResult {
        self.remove_raw(key.id())
    }
}

impl<S: CompositeValueStore + ?Sized> CompositeValueStoreExt for S {}

/// An in-memory store accepting any key.
///
/// The first value offered for a key fixes its type; later offers of a
/// different type are refused.
#[derive(Debug, Default)]
pub struct DataMap {
    values: HashMap<&'static str, RawValue>,
}

impl DataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert that bypasses the type check.
    pub fn with<E: Any + Send + Sync>(mut self, key: &Key<E>, value: E) -> Self {
        self.values.insert(key.id(), RawValue::new(value));
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueContainer for DataMap {
    fn raw_value(&self, key_id: &str) -> Option<&dyn Any> {
        self.values.get(key_id).map(RawValue::as_any)
    }

    fn keys(&self) -> Vec<&'static str> {
        self.values.keys().copied().collect()
    }

    fn supports(&self, key_id: &str) -> bool {
        self.values.contains_key(key_id)
    }
}

impl CompositeValueStore for DataMap {
    fn offer_raw(&mut self, key_id: &'static str, value: RawValue) -> DataTransactionResult {
        if let Some(existing) = self.values.get(key_id) {
            if !existing.is_same_type(&value) {
                warn!(
                    "Rejected {} for key '{}': holds a {}",
                    value.type_name(),
                    key_id,
                    existing.type_name()
                );
                return DataTransactionResult::error(
                    key_id,
                    DataError::TypeMismatch {
                        key: key_id.to_string(),
                        expected: existing.type_name(),
                    },
                );
            }
        }

        let replaced = self.values.insert(key_id, value).is_some();
        debug!("Stored value for key '{}' (replaced: {})", key_id, replaced);
        DataTransactionResult::success(key_id, replaced)
    }

    fn remove_raw(&mut self, key_id: &str) -> DataTransactionResult {
        match self.values.remove(key_id) {
            Some(_) => DataTransactionResult::success(key_id, true),
            None => DataTransactionResult::failure(
                key_id,
                DataError::UnsupportedKey(key_id.to_string()),
            ),
        }
    }
}
