use super::Key;
use crate::error::DataError;
use std::fmt::Debug;

/// A value constrained to an inclusive range, with a default to reset to.
///
/// Setters never clamp: anything outside `[min, max]` is rejected and the
/// current value is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedValue<E> {
    key: &'static str,
    value: E,
    default: E,
    min: E,
    max: E,
}

impl<E> BoundedValue<E>
where
    E: PartialOrd + Clone + Debug,
{
    /// Creates a value holding `default`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidBounds`] when `min > max` or `default`
    /// falls outside the range.
    pub fn new(key: &Key<E>, default: E, min: E, max: E) -> Result<Self, DataError> {
        let in_range = min <= max && min <= default && default <= max;
        if !in_range {
            return Err(DataError::InvalidBounds {
                key: key.id().to_string(),
                default: format!("{default:?}"),
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            });
        }
        Ok(Self::from_parts(key.id(), default.clone(), default, min, max))
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with_value(mut self, value: E) -> Result<Self, DataError> {
        self.set(value)?;
        Ok(self)
    }

    pub(crate) fn from_parts(key: &'static str, value: E, default: E, min: E, max: E) -> Self {
        Self {
            key,
            value,
            default,
            min,
            max,
        }
    }

    pub fn key_id(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> &E {
        &self.value
    }

    pub fn default_value(&self) -> &E {
        &self.default
    }

    pub fn min(&self) -> &E {
        &self.min
    }

    pub fn max(&self) -> &E {
        &self.max
    }

    pub fn contains(&self, value: &E) -> bool {
        &self.min <= value && value <= &self.max
    }

    /// Replaces the value, returning the previous one.
    pub fn set(&mut self, value: E) -> Result<E, DataError> {
        if !self.contains(&value) {
            return Err(DataError::OutOfBounds {
                key: self.key.to_string(),
                value: format!("{value:?}"),
                min: format!("{:?}", self.min),
                max: format!("{:?}", self.max),
            });
        }
        Ok(std::mem::replace(&mut self.value, value))
    }

    /// Restores the default, returning the previous value.
    pub fn reset(&mut self) -> E {
        std::mem::replace(&mut self.value, self.default.clone())
    }
}
