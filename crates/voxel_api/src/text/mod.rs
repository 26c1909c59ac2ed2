//! # Text Model
//!
//! The value type every formatting and templating helper in this crate works
//! on. A [`Text`] is a small tree: a piece of content (literal or
//! translatable), an optional colour, a style, and child texts appended after
//! it. Children inherit nothing at this level; inheritance is a client
//! concern.
//!
//! Texts serialize to the chat-component JSON clients expect:
//!
//! ```rust
//! use voxel_api::text::{Text, TextColor};
//!
//! let text = Text::builder().content("Hello").color(TextColor::Gold).build();
//! let json = serde_json::to_string(&text).unwrap();
//! assert_eq!(json, r#"{"text":"Hello","color":"gold"}"#);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod template;
mod translation;

pub use translation::{Translatable, Translation};

/// The named chat colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Reset,
}

/// Style flags. `None` means "not specified" and leaves the decision to
/// whatever the text is rendered inside of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
}

impl TextStyle {
    pub const NONE: TextStyle = TextStyle {
        bold: None,
        italic: None,
        underlined: None,
        strikethrough: None,
        obfuscated: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Combines two styles; flags set on `other` win.
    pub fn and(self, other: TextStyle) -> TextStyle {
        TextStyle {
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underlined: other.underlined.or(self.underlined),
            strikethrough: other.strikethrough.or(self.strikethrough),
            obfuscated: other.obfuscated.or(self.obfuscated),
        }
    }
}

/// What a text node displays before its children.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContent {
    Literal(String),
    Translatable {
        translation: Translation,
        args: Vec<Text>,
    },
}

impl Default for TextContent {
    fn default() -> Self {
        TextContent::Literal(String::new())
    }
}

/// An immutable, formatted piece of chat text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawText", from = "TextRepr")]
pub struct Text {
    content: TextContent,
    color: Option<TextColor>,
    style: TextStyle,
    children: Vec<Text>,
}

impl Text {
    /// The empty text.
    pub const fn empty() -> Self {
        Self {
            content: TextContent::Literal(String::new()),
            color: None,
            style: TextStyle::NONE,
            children: Vec::new(),
        }
    }

    /// An unformatted literal text.
    pub fn of(content: impl Into<String>) -> Self {
        Self {
            content: TextContent::Literal(content.into()),
            ..Self::empty()
        }
    }

    /// A text rendered by the client from `value`'s translation.
    pub fn translatable<T: Translatable + ?Sized>(value: &T, args: Vec<Text>) -> Self {
        Self {
            content: TextContent::Translatable {
                translation: value.translation(),
                args,
            },
            ..Self::empty()
        }
    }

    pub fn builder() -> TextBuilder {
        TextBuilder::default()
    }

    /// A builder pre-filled with this text, for deriving a modified copy.
    pub fn to_builder(&self) -> TextBuilder {
        TextBuilder {
            content: self.content.clone(),
            color: self.color,
            style: self.style,
            children: self.children.clone(),
        }
    }

    /// Joins `texts` into one text, placing `separator` between neighbours.
    pub fn join(separator: &Text, texts: impl IntoIterator<Item = Text>) -> Text {
        let mut builder = Text::builder();
        for (index, text) in texts.into_iter().enumerate() {
            if index > 0 {
                builder = builder.append(separator.clone());
            }
            builder = builder.append(text);
        }
        builder.build()
    }

    pub fn content(&self) -> &TextContent {
        &self.content
    }

    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn children(&self) -> &[Text] {
        &self.children
    }

    /// True when nothing would be displayed: an empty literal with no
    /// children. Translatable texts are never empty.
    pub fn is_empty(&self) -> bool {
        match &self.content {
            TextContent::Literal(content) => content.is_empty() && self.children.is_empty(),
            TextContent::Translatable { .. } => false,
        }
    }

    /// The unformatted content of the whole tree.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match &self.content {
            TextContent::Literal(content) => out.push_str(content),
            TextContent::Translatable { translation, args } => {
                out.push_str(&translation.format(args))
            }
        }
        for child in &self.children {
            child.write_plain(out);
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::of(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::of(value)
    }
}

impl From<char> for Text {
    fn from(value: char) -> Self {
        Text::of(value.to_string())
    }
}

/// Builder for [`Text`].
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    content: TextContent,
    color: Option<TextColor>,
    style: TextStyle,
    children: Vec<Text>,
}

impl TextBuilder {
    /// Replaces the content with a literal.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = TextContent::Literal(content.into());
        self
    }

    /// Replaces the content with a translation.
    pub fn translation<T: Translatable + ?Sized>(mut self, value: &T, args: Vec<Text>) -> Self {
        self.content = TextContent::Translatable {
            translation: value.translation(),
            args,
        };
        self
    }

    pub fn color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Merges `style` into the current style.
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = self.style.and(style);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.style.italic = Some(italic);
        self
    }

    pub fn append(mut self, child: impl Into<Text>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn append_all(mut self, children: impl IntoIterator<Item = Text>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Text {
        Text {
            content: self.content,
            color: self.color,
            style: self.style,
            children: self.children,
        }
    }
}

// ============================================================================
// Chat component JSON
// ============================================================================

#[derive(Serialize, Deserialize)]
struct RawText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    translate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    with: Vec<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<TextColor>,
    #[serde(flatten)]
    style: TextStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    extra: Vec<Text>,
}

/// Clients accept a bare string anywhere a component is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Plain(String),
    Component(RawText),
}

impl From<Text> for RawText {
    fn from(text: Text) -> Self {
        let (literal, translate, fallback, with) = match text.content {
            TextContent::Literal(content) => (Some(content), None, None, Vec::new()),
            TextContent::Translatable { translation, args } => (
                None,
                Some(translation.id().to_string()),
                translation.fallback().map(str::to_string),
                args,
            ),
        };
        RawText {
            text: literal,
            translate,
            fallback,
            with,
            color: text.color,
            style: text.style,
            extra: text.children,
        }
    }
}

impl From<TextRepr> for Text {
    fn from(repr: TextRepr) -> Self {
        match repr {
            TextRepr::Plain(content) => Text::of(content),
            TextRepr::Component(raw) => {
                let content = match raw.translate {
                    Some(id) => TextContent::Translatable {
                        translation: match raw.fallback {
                            Some(fallback) => Translation::with_fallback(id, fallback),
                            None => Translation::new(id),
                        },
                        args: raw.with,
                    },
                    None => TextContent::Literal(raw.text.unwrap_or_default()),
                };
                Text {
                    content,
                    color: raw.color,
                    style: raw.style,
                    children: raw.extra,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(Text::empty().is_empty());
        assert!(Text::of("").is_empty());
        assert!(!Text::of("a").is_empty());

        let with_child = Text::builder().append(Text::of("x")).build();
        assert!(!with_child.is_empty());

        let translated = Text::translatable(&Translation::new("gui.done"), vec![]);
        assert!(!translated.is_empty());
    }

    #[test]
    fn test_plain_rendering_walks_children() {
        let text = Text::builder()
            .content("Hello, ")
            .color(TextColor::Red)
            .append(Text::of("world"))
            .append('!')
            .build();
        assert_eq!(text.to_plain(), "Hello, world!");
        assert_eq!(text.to_string(), "Hello, world!");
    }

    #[test]
    fn test_to_builder_keeps_existing_formatting() {
        let original = Text::builder().content("hi").bold(true).build();
        let recolored = original.to_builder().color(TextColor::Gray).build();

        assert_eq!(recolored.color(), Some(TextColor::Gray));
        assert_eq!(recolored.style().bold, Some(true));
        assert_eq!(original.color(), None);
    }

    #[test]
    fn test_join() {
        let joined = Text::join(&Text::of(", "), vec![Text::of("a"), Text::of("b"), Text::of("c")]);
        assert_eq!(joined.to_plain(), "a, b, c");
        assert!(Text::join(&Text::of(", "), Vec::new()).is_empty());
    }

    #[test]
    fn test_style_merge_prefers_other() {
        let base = TextStyle { bold: Some(true), italic: Some(true), ..TextStyle::NONE };
        let over = TextStyle { italic: Some(false), ..TextStyle::NONE };
        let merged = base.and(over);
        assert_eq!(merged.bold, Some(true));
        assert_eq!(merged.italic, Some(false));
        assert!(TextStyle::default().is_empty());
    }

    #[test]
    fn test_serialize_component_json() {
        let text = Text::builder()
            .content("Warning")
            .color(TextColor::DarkRed)
            .bold(true)
            .append(Text::of(": low health"))
            .build();
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "Warning",
                "color": "dark_red",
                "bold": true,
                "extra": [{"text": ": low health"}]
            })
        );
    }

    #[test]
    fn test_deserialize_plain_string_and_translation() {
        let plain: Text = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(plain, Text::of("hello"));

        let translated: Text = serde_json::from_str(
            r#"{"translate":"chat.type.text","with":["Alex",{"text":"hi","italic":true}]}"#,
        )
        .unwrap();
        match translated.content() {
            TextContent::Translatable { translation, args } => {
                assert_eq!(translation.id(), "chat.type.text");
                assert_eq!(args.len(), 2);
                assert_eq!(args[1].style().italic, Some(true));
            }
            other => panic!("expected translatable content, got {other:?}"),
        }
    }

    #[test]
    fn test_json_round_trip_preserves_tree() {
        let text = Text::builder()
            .translation(&Translation::with_fallback("death.attack.fall", "%s hit the ground"), vec![Text::of("Steve")])
            .color(TextColor::Gray)
            .append(Text::builder().content(" (x2)").italic(true).build())
            .build();
        let json = serde_json::to_string(&text).unwrap();
        let back: Text = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
        assert_eq!(back.to_plain(), "Steve hit the ground (x2)");
    }
}
