//! Style definitions
//!
//! A [`Style`] maps a symmetric markup string to the CSS classnames emitted
//! for spans wrapped in that markup. Every invariant is enforced once, in
//! [`Style::new`]; a constructed style is immutable and safe to hand to the
//! pattern compiler as-is.

use serde::Serialize;

use crate::error::ConfigError;

/// Characters that can never be used as a markup character. They would end
/// up embedded in HTML attribute/content output and in a generated pattern.
pub const RESERVED_CHARACTERS: &[char] = &['&', '"', '\'', '>', '<', '\\', '/', ';'];

/// A single validated markup style.
///
/// - `name` is the display label used for menu entries.
/// - `markup` is one character repeated one or more times (`*`, `**`, `~~~`).
/// - `classnames` is the ordered, non-empty class list emitted verbatim as
///   the `class` attribute of rendered spans, parent classnames first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Style {
    name: String,
    markup: String,
    classnames: Vec<String>,
}

impl Style {
    /// Validate and construct a style.
    ///
    /// Fails when the name, markup or classname list is empty, when the
    /// markup mixes distinct characters, or when the markup character is in
    /// [`RESERVED_CHARACTERS`].
    pub fn new(
        name: impl Into<String>,
        markup: impl Into<String>,
        classnames: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let markup = markup.into();

        if name.is_empty() {
            return Err(ConfigError::MissingField("name"));
        }
        if markup.is_empty() {
            return Err(ConfigError::MissingField("markup"));
        }
        if classnames.is_empty() || classnames.iter().any(String::is_empty) {
            return Err(ConfigError::MissingField("classnames"));
        }

        // markup must be its own first character repeated.
        let character = markup.chars().next().unwrap_or_default();
        if markup.chars().any(|c| c != character) {
            return Err(ConfigError::MixedMarkup(markup));
        }
        if RESERVED_CHARACTERS.contains(&character) {
            return Err(ConfigError::ReservedCharacter { name, character });
        }

        Ok(Style {
            name,
            markup,
            classnames,
        })
    }

    /// The display label (menu entry) for this style.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symmetric markup string, e.g. `~~`.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The single character the markup repeats.
    pub fn character(&self) -> char {
        // Non-empty by construction.
        self.markup.chars().next().unwrap_or_default()
    }

    /// The classnames emitted for spans in this style, in declared order.
    pub fn classnames(&self) -> &[String] {
        &self.classnames
    }

    /// The space-joined `class` attribute value.
    pub fn class_attribute(&self) -> String {
        self.classnames.join(" ")
    }
}
