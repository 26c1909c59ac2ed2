//! # Command Message Formatting
//!
//! Shared building blocks for command output: the punctuation used in usage
//! strings and the colouring of error and debug messages sent straight to a
//! command source.

use crate::text::{Text, TextColor};
use serde::{Deserialize, Serialize};

pub fn pipe_text() -> Text {
    Text::of("|")
}

pub fn space_text() -> Text {
    Text::of(" ")
}

pub fn star_text() -> Text {
    Text::of("*")
}

pub fn newline_text() -> Text {
    Text::from('\n')
}

pub fn lt_text() -> Text {
    Text::of("<")
}

pub fn gt_text() -> Text {
    Text::of(">")
}

pub fn ellipsis_text() -> Text {
    Text::of("…")
}

/// `<name>`, the usage form of a required argument.
pub fn required_argument(name: impl Into<Text>) -> Text {
    Text::builder()
        .append(lt_text())
        .append(name)
        .append(gt_text())
        .build()
}

/// `a|b|c`, the usage form of alternatives.
pub fn alternatives(options: impl IntoIterator<Item = Text>) -> Text {
    Text::join(&pipe_text(), options)
}

/// Formats `error` for output directly to a command source.
///
/// Not needed for errors that are raised as command failures; the command
/// dispatcher formats those itself.
pub fn error(error: &Text) -> Text {
    CommandFormatter::default().error(error)
}

/// Formats `debug` for output directly to a command source.
pub fn debug(debug: &Text) -> Text {
    CommandFormatter::default().debug(debug)
}

/// Colours used for direct command feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandFormatter {
    pub error_color: TextColor,
    pub debug_color: TextColor,
}

impl Default for CommandFormatter {
    fn default() -> Self {
        Self {
            error_color: TextColor::Red,
            debug_color: TextColor::Gray,
        }
    }
}

impl CommandFormatter {
    pub fn new(error_color: TextColor, debug_color: TextColor) -> Self {
        Self {
            error_color,
            debug_color,
        }
    }

    /// A copy of `error` in the error colour; other formatting is kept.
    pub fn error(&self, error: &Text) -> Text {
        error.to_builder().color(self.error_color).build()
    }

    /// A copy of `debug` in the debug colour; other formatting is kept.
    pub fn debug(&self, debug: &Text) -> Text {
        debug.to_builder().color(self.debug_color).build()
    }
}
