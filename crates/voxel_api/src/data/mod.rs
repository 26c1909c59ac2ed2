//! # Data API
//!
//! Keyed access to the attributes of game objects.
//!
//! - [`Key`] names a piece of data and fixes its type.
//! - [`ValueContainer`] / [`CompositeValueStore`] read and write keyed data.
//! - [`BoundedValue`] constrains numeric attributes to a range.
//! - [`DataManipulator`] bundles related values, e.g. [`MovementSpeedData`].
//!
//! The host owns the actual storage behind entities and blocks; [`DataMap`]
//! and [`MovementSpeed`] are ready-made implementations hosts may reuse.
//!
//! ```rust
//! use voxel_api::data::{keys, CompositeValueStoreExt, DataManipulator, DataMap, MovementSpeed, ValueContainerExt};
//!
//! let mut player = DataMap::new().with(&keys::WALKING_SPEED, 0.1);
//! let mut speeds = MovementSpeed::new();
//! speeds.fill(&player);
//! speeds.offer(&keys::FLYING_SPEED, 0.2);
//! speeds.apply_to(&mut player);
//! assert_eq!(player.get(&keys::FLYING_SPEED), Some(0.2));
//! ```

mod key;
mod manipulator;
mod movement;
mod store;
mod value;

pub use key::{keys, Key};
pub use manipulator::{DataManipulator, ImmutableDataManipulator};
pub use movement::{
    ImmutableMovementSpeed, ImmutableMovementSpeedData, MovementSpeed, MovementSpeedData,
    DEFAULT_FLYING_SPEED, DEFAULT_WALKING_SPEED, MAX_SPEED, MIN_SPEED,
};
pub use store::{
    CompositeValueStore, CompositeValueStoreExt, DataMap, DataTransactionResult, RawValue,
    TransactionKind, ValueContainer, ValueContainerExt,
};
pub use value::BoundedValue;
