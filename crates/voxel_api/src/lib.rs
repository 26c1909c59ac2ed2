//! # Voxel API
//!
//! The contract between a voxel game server and the extensions it loads at
//! runtime. The host implements the traits in this crate; extensions program
//! against them and never against the host directly.
//!
//! ## Modules
//!
//! - [`text`] - the chat text model and [`text::template`], a combinator
//!   library for turning values into text
//! - [`command`] - styling for command feedback
//! - [`data`] - keys, bounded values and data manipulators such as
//!   [`data::MovementSpeedData`]
//! - [`resourcepack`] - resource packs and the factory hosts provide
//! - [`config`] / [`logging`] - settings file and tracing setup
//!
//! ## Example
//!
//! ```rust
//! use voxel_api::prelude::*;
//!
//! let name = template::fallback_text(template::player_display_name(), "Unknown");
//! let player = DataMap::new().with(&keys::DISPLAY_NAME, Text::of("Steve"));
//!
//! let line = command::error(&name.create(&player));
//! assert_eq!(line.to_plain(), "Steve");
//! assert_eq!(line.color(), Some(TextColor::Red));
//! ```

pub mod command;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod resourcepack;
pub mod text;

pub use error::{ConfigError, DataError, ResourcePackError};

/// Everything an extension typically needs.
pub mod prelude {
    pub use crate::command::{self, CommandFormatter};
    pub use crate::config::ApiSettings;
    pub use crate::data::{
        keys, BoundedValue, CompositeValueStore, CompositeValueStoreExt, DataManipulator,
        DataMap, DataTransactionResult, ImmutableDataManipulator, Key, MovementSpeed,
        MovementSpeedData, ValueContainer, ValueContainerExt,
    };
    pub use crate::error::{ConfigError, DataError, ResourcePackError};
    pub use crate::resourcepack::{ResourcePack, ResourcePackFactory, ResourcePackStatus};
    pub use crate::text::template::{self, TextElement, TextElementExt};
    pub use crate::text::{Text, TextBuilder, TextColor, TextStyle, Translatable, Translation};
}
