use std::fmt;
use std::marker::PhantomData;

/// A typed handle to one piece of data on a value container.
///
/// The type parameter is the element type stored under the key. Keys are
/// plain constants; two keys are equal when their ids are.
pub struct Key<E> {
    id: &'static str,
    name: &'static str,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Key<E> {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            _marker: PhantomData,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Human readable name, used in logs and error messages.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

// Not derived: none of these may depend on bounds on `E`.
impl<E> Clone for Key<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Key<E> {}

impl<E> PartialEq for Key<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Key<E> {}

impl<E> fmt::Debug for Key<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("id", &self.id)
            .field("element", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E> fmt::Display for Key<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// The keys every host is expected to understand.
pub mod keys {
    use super::Key;
    use crate::text::Text;

    /// The name shown for an entity, e.g. above a player's head.
    pub const DISPLAY_NAME: Key<Text> = Key::new("display_name", "Display Name");
    /// Walking speed of a player.
    pub const WALKING_SPEED: Key<f64> = Key::new("walking_speed", "Walking Speed");
    /// Flying speed of a player.
    pub const FLYING_SPEED: Key<f64> = Key::new("flying_speed", "Flying Speed");
    /// The lines written on a sign block.
    pub const SIGN_LINES: Key<Vec<Text>> = Key::new("sign_lines", "Sign Lines");
    /// Output of the last command a command block ran, if any.
    pub const LAST_COMMAND_OUTPUT: Key<Option<Text>> =
        Key::new("last_command_output", "Last Command Output");
}
