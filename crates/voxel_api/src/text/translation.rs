use super::Text;
use serde::{Deserialize, Serialize};

/// A translation key understood by clients, with an optional fallback pattern
/// used when the text has to be rendered server side.
///
/// Fallback patterns use `%s` for positional arguments and `%%` for a literal
/// percent sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Translation {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<String>,
}

impl Translation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fallback: None,
        }
    }

    pub fn with_fallback(id: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fallback: Some(fallback.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Renders the fallback pattern with the plain form of `args`.
    ///
    /// Without a fallback the translation id itself is returned. Placeholders
    /// beyond the supplied arguments render as nothing.
    pub fn format(&self, args: &[Text]) -> String {
        let Some(pattern) = &self.fallback else {
            return self.id.clone();
        };

        let mut out = String::with_capacity(pattern.len());
        let mut args = args.iter();
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('s') => {
                    chars.next();
                    if let Some(arg) = args.next() {
                        out.push_str(&arg.to_plain());
                    }
                }
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                _ => out.push('%'),
            }
        }
        out
    }
}

/// Anything that can be shown to a player through a client-side translation.
pub trait Translatable {
    fn translation(&self) -> Translation;
}

impl Translatable for Translation {
    fn translation(&self) -> Translation {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_fallback_uses_id() {
        let translation = Translation::new("item.minecraft.diamond");
        assert_eq!(translation.format(&[]), "item.minecraft.diamond");
    }

    #[test]
    fn test_format_substitutes_args_in_order() {
        let translation = Translation::with_fallback("chat.type.text", "<%s> %s");
        let rendered = translation.format(&[Text::of("Steve"), Text::of("hello")]);
        assert_eq!(rendered, "<Steve> hello");
    }

    #[test]
    fn test_format_missing_args_and_escapes() {
        let translation = Translation::with_fallback("progress", "%s at 100%% of %s");
        assert_eq!(translation.format(&[Text::of("done")]), "done at 100% of ");
    }
}
