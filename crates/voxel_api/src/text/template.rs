//! # Text Templates
//!
//! A [`TextElement`] turns a value into a piece of [`Text`]. Elements are
//! stateless and compose: the free functions in this module build new
//! elements out of existing ones and plain closures.
//!
//! ```rust
//! use voxel_api::text::Text;
//! use voxel_api::text::template::{self, TextElement};
//!
//! let shout = template::function(|name: &String| Text::of(name.to_uppercase()));
//! let names = template::iterable_default(shout);
//! let everyone = template::fallback_text(names, "nobody");
//!
//! let online = vec!["alex".to_string(), "steve".to_string()];
//! assert_eq!(everyone.create(&online).to_plain(), "ALEX, STEVE");
//! assert_eq!(everyone.create(&Vec::<String>::new()).to_plain(), "nobody");
//! ```

use super::{Text, Translatable};
use crate::data::{keys, Key, ValueContainer, ValueContainerExt};
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

/// Separator used by [`iterable_default`].
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Creates text for a value of type `T`.
pub trait TextElement<T: ?Sized> {
    fn create(&self, value: &T) -> Text;
}

pub type BoxedTextElement<T> = Box<dyn TextElement<T> + Send + Sync>;

impl<T: ?Sized, E: TextElement<T> + ?Sized> TextElement<T> for &E {
    fn create(&self, value: &T) -> Text {
        (**self).create(value)
    }
}

impl<T: ?Sized, E: TextElement<T> + ?Sized> TextElement<T> for Box<E> {
    fn create(&self, value: &T) -> Text {
        (**self).create(value)
    }
}

impl<T: ?Sized, E: TextElement<T> + ?Sized> TextElement<T> for Arc<E> {
    fn create(&self, value: &T) -> Text {
        (**self).create(value)
    }
}

// ============================================================================
// Elements
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl TextElement<Text> for Identity {
    fn create(&self, value: &Text) -> Text {
        value.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Always {
    text: Text,
}

impl<T: ?Sized> TextElement<T> for Always {
    fn create(&self, _value: &T) -> Text {
        self.text.clone()
    }
}

#[derive(Clone)]
pub struct Function<F> {
    f: F,
}

impl<T: ?Sized, F> TextElement<T> for Function<F>
where
    F: Fn(&T) -> Text,
{
    fn create(&self, value: &T) -> Text {
        (self.f)(value)
    }
}

pub struct Compose<E, F, T> {
    element: E,
    f: F,
    _marker: PhantomData<fn() -> T>,
}

impl<E: Clone, F: Clone, T> Clone for Compose<E, F, T> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<U: ?Sized, T, E, F> TextElement<U> for Compose<E, F, T>
where
    E: TextElement<T>,
    F: Fn(&U) -> T,
{
    fn create(&self, value: &U) -> Text {
        self.element.create(&(self.f)(value))
    }
}

#[derive(Clone)]
pub struct Map<E, F> {
    element: E,
    f: F,
}

impl<T: ?Sized, E, F> TextElement<T> for Map<E, F>
where
    E: TextElement<T>,
    F: Fn(Text) -> Text,
{
    fn create(&self, value: &T) -> Text {
        (self.f)(self.element.create(value))
    }
}

#[derive(Debug, Clone)]
pub struct Optional<E> {
    element: E,
}

impl<V, E: TextElement<V>> TextElement<Option<V>> for Optional<E> {
    fn create(&self, value: &Option<V>) -> Text {
        match value {
            Some(inner) => self.element.create(inner),
            None => Text::empty(),
        }
    }
}

/// Renders every item of a collection and joins the non-empty results.
pub struct Iterable<E, V> {
    element: E,
    separator: Text,
    _marker: PhantomData<fn(&V)>,
}

impl<E: Clone, V> Clone for Iterable<E, V> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            separator: self.separator.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: TextElement<V>, V> Iterable<E, V> {
    /// Renders the items of any iterator.
    ///
    /// Items that render to empty text are dropped, so the separator only
    /// ever appears between two visible fragments.
    pub fn create_from_iter<'a, I>(&self, items: I) -> Text
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut builder = Text::builder();
        let mut first = true;
        for item in items {
            let next = self.element.create(item);
            if next.is_empty() {
                continue;
            }
            if !first {
                builder = builder.append(self.separator.clone());
            }
            first = false;
            builder = builder.append(next);
        }
        builder.build()
    }
}

impl<C: ?Sized, V, E> TextElement<C> for Iterable<E, V>
where
    E: TextElement<V>,
    for<'a> &'a C: IntoIterator<Item = &'a V>,
{
    fn create(&self, value: &C) -> Text {
        self.create_from_iter(value)
    }
}

#[derive(Debug, Clone)]
pub struct Fallback<A, B> {
    primary: A,
    fallback: B,
}

impl<T: ?Sized, A, B> TextElement<T> for Fallback<A, B>
where
    A: TextElement<T>,
    B: TextElement<T>,
{
    fn create(&self, value: &T) -> Text {
        let result = self.primary.create(value);
        if result.is_empty() {
            self.fallback.create(value)
        } else {
            result
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TranslatableElement;

impl<T: Translatable> TextElement<T> for TranslatableElement {
    fn create(&self, value: &T) -> Text {
        Text::translatable(value, Vec::new())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyElement {
    key: Key<Text>,
}

impl<C: ValueContainer + ?Sized> TextElement<C> for KeyElement {
    fn create(&self, value: &C) -> Text {
        value.get(&self.key).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct CollectionKey<J, L> {
    key: Key<L>,
    join: J,
}

impl<C, L, J> TextElement<C> for CollectionKey<J, L>
where
    C: ValueContainer + ?Sized,
    L: Any,
    J: TextElement<L>,
{
    fn create(&self, value: &C) -> Text {
        match value.get_ref(&self.key) {
            Some(collection) => self.join.create(collection),
            None => Text::empty(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OptionalKey {
    key: Key<Option<Text>>,
}

impl<C: ValueContainer + ?Sized> TextElement<C> for OptionalKey {
    fn create(&self, value: &C) -> Text {
        value
            .get_ref(&self.key)
            .and_then(Option::as_ref)
            .cloned()
            .unwrap_or_default()
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Passes text through unchanged.
pub fn identity() -> Identity {
    Identity
}

/// Ignores the value and always produces `text`.
pub fn always(text: impl Into<Text>) -> Always {
    Always { text: text.into() }
}

/// Produces text with a closure.
pub fn function<T: ?Sized, F>(f: F) -> Function<F>
where
    F: Fn(&T) -> Text,
{
    Function { f }
}

/// Converts the value with `f` before handing it to `element`.
pub fn compose<U: ?Sized, T, E, F>(element: E, f: F) -> Compose<E, F, T>
where
    E: TextElement<T>,
    F: Fn(&U) -> T,
{
    Compose {
        element,
        f,
        _marker: PhantomData,
    }
}

/// Post-processes what `element` produces.
pub fn map<E, F>(element: E, f: F) -> Map<E, F>
where
    F: Fn(Text) -> Text,
{
    Map { element, f }
}

/// Renders a present value with `element` and an absent one as empty text.
pub fn optional<E>(element: E) -> Optional<E> {
    Optional { element }
}

/// Renders each item with `element`, joined by `separator`.
pub fn iterable<V, E: TextElement<V>>(element: E, separator: impl Into<Text>) -> Iterable<E, V> {
    Iterable {
        element,
        separator: separator.into(),
        _marker: PhantomData,
    }
}

/// [`iterable`] with [`DEFAULT_SEPARATOR`].
pub fn iterable_default<V, E: TextElement<V>>(element: E) -> Iterable<E, V> {
    iterable(element, DEFAULT_SEPARATOR)
}

/// Uses `fallback` whenever `element` produces empty text.
pub fn fallback<A, B>(element: A, fallback: B) -> Fallback<A, B> {
    Fallback {
        primary: element,
        fallback,
    }
}

/// Uses `text` whenever `element` produces empty text.
pub fn fallback_text<A>(element: A, text: impl Into<Text>) -> Fallback<A, Always> {
    Fallback {
        primary: element,
        fallback: always(text),
    }
}

/// Renders anything [`Translatable`] as translated text.
pub fn translatable() -> TranslatableElement {
    TranslatableElement
}

/// Reads a text value off a container; empty if the key is absent.
pub fn key(key: Key<Text>) -> KeyElement {
    KeyElement { key }
}

/// Reads a collection off a container and renders it with `join`.
///
/// ```rust
/// use voxel_api::data::{keys, DataMap};
/// use voxel_api::text::Text;
/// use voxel_api::text::template::{self, TextElement};
///
/// let lines = template::collection_key(keys::SIGN_LINES, template::iterable(template::identity(), " / "));
/// let sign = DataMap::new().with(&keys::SIGN_LINES, vec![Text::of("Welcome"), Text::of("to spawn")]);
/// assert_eq!(lines.create(&sign).to_plain(), "Welcome / to spawn");
/// ```
pub fn collection_key<L: Any, J: TextElement<L>>(key: Key<L>, join: J) -> CollectionKey<J, L> {
    CollectionKey { key, join }
}

/// Reads an optional text off a container; empty if absent or `None`.
pub fn optional_key(key: Key<Option<Text>>) -> OptionalKey {
    OptionalKey { key }
}

/// The display name of a player (or anything else with one).
pub fn player_display_name() -> KeyElement {
    key(keys::DISPLAY_NAME)
}

// ============================================================================
// Method syntax
// ============================================================================

/// Chaining forms of the constructors above.
///
/// Elements that render several types (like [`Always`]) may need the value
/// type spelled out when chained.
pub trait TextElementExt<T: ?Sized>: TextElement<T> + Sized {
    fn map_text<F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Text) -> Text,
    {
        map(self, f)
    }

    fn or_else<B: TextElement<T>>(self, other: B) -> Fallback<Self, B> {
        fallback(self, other)
    }

    fn or_text(self, text: impl Into<Text>) -> Fallback<Self, Always> {
        fallback_text(self, text)
    }

    fn compose_with<U: ?Sized, F>(self, f: F) -> Compose<Self, F, T>
    where
        T: Sized,
        F: Fn(&U) -> T,
    {
        compose(self, f)
    }

    fn boxed(self) -> BoxedTextElement<T>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, E: TextElement<T>> TextElementExt<T> for E {}
