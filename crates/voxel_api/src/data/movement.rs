//! Movement speeds.
//!
//! Players carry a walking and a flying speed. Other entities usually expose
//! speed through generic attributes instead, so only players are expected to
//! support [`MovementSpeedData`].

use super::{
    keys, BoundedValue, CompositeValueStore, CompositeValueStoreExt, DataManipulator,
    DataTransactionResult, ImmutableDataManipulator, RawValue, ValueContainer, ValueContainerExt,
};
use crate::error::DataError;
use std::any::Any;
use tracing::{debug, warn};

pub const DEFAULT_WALKING_SPEED: f64 = 0.1;
pub const DEFAULT_FLYING_SPEED: f64 = 0.05;
pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = f64::MAX;

/// The movement speeds of a player.
pub trait MovementSpeedData: DataManipulator {
    /// The bounded value for the walking speed.
    fn walk_speed(&self) -> &BoundedValue<f64>;

    fn walk_speed_mut(&mut self) -> &mut BoundedValue<f64>;

    /// The bounded value for the flying speed.
    fn fly_speed(&self) -> &BoundedValue<f64>;

    fn fly_speed_mut(&mut self) -> &mut BoundedValue<f64>;
}

/// Read-only movement speeds.
pub trait ImmutableMovementSpeedData: ImmutableDataManipulator {
    fn walk_speed(&self) -> &BoundedValue<f64>;

    fn fly_speed(&self) -> &BoundedValue<f64>;
}

/// Stock [`MovementSpeedData`] backed by two bounded values.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementSpeed {
    walk: BoundedValue<f64>,
    fly: BoundedValue<f64>,
}

impl MovementSpeed {
    pub fn new() -> Self {
        Self {
            walk: speed_value(keys::WALKING_SPEED.id(), DEFAULT_WALKING_SPEED),
            fly: speed_value(keys::FLYING_SPEED.id(), DEFAULT_FLYING_SPEED),
        }
    }

    pub fn with_speeds(walk: f64, fly: f64) -> Result<Self, DataError> {
        let mut speeds = Self::new();
        speeds.walk.set(walk)?;
        speeds.fly.set(fly)?;
        Ok(speeds)
    }

    fn value_for(&self, key_id: &str) -> Option<&BoundedValue<f64>> {
        if key_id == keys::WALKING_SPEED.id() {
            Some(&self.walk)
        } else if key_id == keys::FLYING_SPEED.id() {
            Some(&self.fly)
        } else {
            None
        }
    }

    fn value_for_mut(&mut self, key_id: &str) -> Option<&mut BoundedValue<f64>> {
        if key_id == keys::WALKING_SPEED.id() {
            Some(&mut self.walk)
        } else if key_id == keys::FLYING_SPEED.id() {
            Some(&mut self.fly)
        } else {
            None
        }
    }
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self::new()
    }
}

fn speed_value(key: &'static str, default: f64) -> BoundedValue<f64> {
    BoundedValue::from_parts(key, default, default, MIN_SPEED, MAX_SPEED)
}

impl ValueContainer for MovementSpeed {
    fn raw_value(&self, key_id: &str) -> Option<&dyn Any> {
        self.value_for(key_id).map(|value| value.get() as &dyn Any)
    }

    fn keys(&self) -> Vec<&'static str> {
        vec![keys::WALKING_SPEED.id(), keys::FLYING_SPEED.id()]
    }
}

impl CompositeValueStore for MovementSpeed {
    fn offer_raw(&mut self, key_id: &'static str, value: RawValue) -> DataTransactionResult {
        let Some(target) = self.value_for_mut(key_id) else {
            return DataTransactionResult::failure(
                key_id,
                DataError::UnsupportedKey(key_id.to_string()),
            );
        };

        let speed = match value.downcast::<f64>() {
            Ok(speed) => speed,
            Err(value) => {
                warn!("Rejected {} offered for '{}'", value.type_name(), key_id);
                return DataTransactionResult::error(
                    key_id,
                    DataError::TypeMismatch {
                        key: key_id.to_string(),
                        expected: "f64",
                    },
                );
            }
        };

        match target.set(speed) {
            Ok(_) => DataTransactionResult::success(key_id, true),
            Err(err) => {
                warn!("{}", err);
                DataTransactionResult::failure(key_id, err)
            }
        }
    }

    fn remove_raw(&mut self, key_id: &str) -> DataTransactionResult {
        let err = match self.value_for(key_id) {
            Some(_) => DataError::NotRemovable(key_id.to_string()),
            None => DataError::UnsupportedKey(key_id.to_string()),
        };
        DataTransactionResult::failure(key_id, err)
    }
}

impl DataManipulator for MovementSpeed {
    type Immutable = ImmutableMovementSpeed;

    fn fill(&mut self, source: &dyn ValueContainer) -> bool {
        let mut filled = false;
        for (key, target) in [
            (keys::WALKING_SPEED, &mut self.walk),
            (keys::FLYING_SPEED, &mut self.fly),
        ] {
            let Some(speed) = source.get(&key) else {
                continue;
            };
            match target.set(speed) {
                Ok(_) => filled = true,
                Err(err) => debug!("Skipped value while filling movement speeds: {}", err),
            }
        }
        filled
    }

    fn apply_to(&self, target: &mut dyn CompositeValueStore) -> DataTransactionResult {
        DataTransactionResult::combine([
            target.offer(&keys::WALKING_SPEED, *self.walk.get()),
            target.offer(&keys::FLYING_SPEED, *self.fly.get()),
        ])
    }

    fn as_immutable(&self) -> ImmutableMovementSpeed {
        ImmutableMovementSpeed {
            inner: self.clone(),
        }
    }
}

impl MovementSpeedData for MovementSpeed {
    fn walk_speed(&self) -> &BoundedValue<f64> {
        &self.walk
    }

    fn walk_speed_mut(&mut self) -> &mut BoundedValue<f64> {
        &mut self.walk
    }

    fn fly_speed(&self) -> &BoundedValue<f64> {
        &self.fly
    }

    fn fly_speed_mut(&mut self) -> &mut BoundedValue<f64> {
        &mut self.fly
    }
}

/// Frozen copy of a [`MovementSpeed`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImmutableMovementSpeed {
    inner: MovementSpeed,
}

impl ValueContainer for ImmutableMovementSpeed {
    fn raw_value(&self, key_id: &str) -> Option<&dyn Any> {
        self.inner.raw_value(key_id)
    }

    fn keys(&self) -> Vec<&'static str> {
        self.inner.keys()
    }
}

impl ImmutableDataManipulator for ImmutableMovementSpeed {
    type Mutable = MovementSpeed;

    fn as_mutable(&self) -> MovementSpeed {
        self.inner.clone()
    }
}

impl ImmutableMovementSpeedData for ImmutableMovementSpeed {
    fn walk_speed(&self) -> &BoundedValue<f64> {
        &self.inner.walk
    }

    fn fly_speed(&self) -> &BoundedValue<f64> {
        &self.inner.fly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataMap, TransactionKind};

    #[test]
    fn test_defaults() {
        let speeds = MovementSpeed::new();
        assert_eq!(*speeds.walk_speed().get(), DEFAULT_WALKING_SPEED);
        assert_eq!(*speeds.fly_speed().get(), DEFAULT_FLYING_SPEED);
        assert_eq!(*speeds.walk_speed().min(), 0.0);
        assert_eq!(speeds.get(&keys::FLYING_SPEED), Some(0.05));
    }

    #[test]
    fn test_offer_respects_bounds() {
        let mut speeds = MovementSpeed::new();

        let ok = speeds.offer(&keys::WALKING_SPEED, 0.3);
        assert!(ok.is_successful());
        assert!(ok.replaced());
        assert_eq!(*speeds.walk_speed().get(), 0.3);

        let rejected = speeds.offer(&keys::WALKING_SPEED, -1.0);
        assert_eq!(rejected.kind(), TransactionKind::Failure);
        assert!(matches!(rejected.rejection(), Some(DataError::OutOfBounds { .. })));
        assert_eq!(*speeds.walk_speed().get(), 0.3);

        for bad in [f64::NAN, f64::INFINITY] {
            let rejected = speeds.offer(&keys::FLYING_SPEED, bad);
            assert_eq!(rejected.kind(), TransactionKind::Failure);
            assert!(matches!(rejected.rejection(), Some(DataError::OutOfBounds { .. })));
            assert_eq!(*speeds.fly_speed().get(), DEFAULT_FLYING_SPEED);
        }
    }

    #[test]
    fn test_offer_unknown_key_or_type() {
        let mut speeds = MovementSpeed::new();

        let unknown = speeds.offer(&keys::SIGN_LINES, Vec::new());
        assert_eq!(unknown.kind(), TransactionKind::Failure);

        let wrong_type = speeds.offer_raw(keys::FLYING_SPEED.id(), RawValue::new(1_u32));
        assert_eq!(wrong_type.kind(), TransactionKind::Error);
        assert_eq!(*speeds.fly_speed().get(), DEFAULT_FLYING_SPEED);
    }

    #[test]
    fn test_speeds_cannot_be_removed() {
        let mut speeds = MovementSpeed::new();
        let result = speeds.remove(&keys::WALKING_SPEED);
        assert_eq!(
            result.rejection(),
            Some(&DataError::NotRemovable("walking_speed".to_string()))
        );
    }

    #[test]
    fn test_fill_from_holder_and_apply_back() {
        let holder = DataMap::new()
            .with(&keys::WALKING_SPEED, 0.2)
            .with(&keys::FLYING_SPEED, -3.0);

        let mut speeds = MovementSpeed::new();
        assert!(speeds.fill(&holder));
        assert_eq!(*speeds.walk_speed().get(), 0.2);
        // Out-of-range source values are skipped
        assert_eq!(*speeds.fly_speed().get(), DEFAULT_FLYING_SPEED);

        let mut target = DataMap::new();
        let result = speeds.apply_to(&mut target);
        assert!(result.is_successful());
        assert_eq!(result.keys().len(), 2);
        assert_eq!(target.get(&keys::WALKING_SPEED), Some(0.2));
        assert_eq!(target.get(&keys::FLYING_SPEED), Some(DEFAULT_FLYING_SPEED));
    }

    #[test]
    fn test_fill_from_empty_holder() {
        let mut speeds = MovementSpeed::new();
        assert!(!speeds.fill(&DataMap::new()));
    }

    #[test]
    fn test_immutable_round_trip() {
        let speeds = MovementSpeed::with_speeds(0.4, 0.1).unwrap();
        let frozen = speeds.as_immutable();
        assert_eq!(*ImmutableMovementSpeedData::walk_speed(&frozen).get(), 0.4);
        assert_eq!(frozen.get(&keys::FLYING_SPEED), Some(0.1));

        let mut thawed = frozen.as_mutable();
        thawed.walk_speed_mut().set(0.9).unwrap();
        assert_eq!(*ImmutableMovementSpeedData::walk_speed(&frozen).get(), 0.4);
        assert_eq!(thawed, MovementSpeed::with_speeds(0.9, 0.1).unwrap());
    }

    #[test]
    fn test_with_speeds_rejects_negative() {
        assert!(MovementSpeed::with_speeds(-0.1, 0.05).is_err());
    }
}
