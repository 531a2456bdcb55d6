//! Pattern compilation
//!
//! Turns a [`Style`]'s markup into the pattern that matches its delimited
//! spans, and owns the two replacements applied to each match: rendering the
//! captured contents into a classed `<span>`, or stripping the markup and
//! keeping the contents alone.
//!
//! The pattern for a markup of character `c` repeated `n` times is
//!
//! ```text
//! (?<!c) c{n} (?!c) (?P<contents>[^c]*?) (?<!c) c{n} (?!c)
//! ```
//!
//! The opening run of `c` matches only when it is *not* preceded or followed
//! by another `c`, so a run of the wrong length never matches: `~~` never
//! matches inside `~~~`, and `~` never matches inside `~~`. Styles of
//! different repeat counts on the same character are therefore mutually
//! exclusive and non-overlapping. The capture excludes `c` and is lazy, so a
//! span always ends at the *nearest* valid closing run, and matching never
//! backtracks across delimiter candidates.
//!
//! Lookbehind/lookahead guards are beyond the `regex` crate, hence
//! `fancy-regex`.

use fancy_regex::{escape, Regex};
use once_cell::sync::Lazy;

use crate::error::ConfigError;
use crate::style::Style;

/// Name of the capture group holding a span's inner text.
pub const CONTENTS: &str = "contents";

/// The element wrapped around rendered span contents.
pub const SPAN_TAG: &str = "span";

/// Catch-all pattern treating a whole string as one span. Used to validate
/// text before it is wrapped in new markup.
pub static CATCH_ALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(?P<contents>.*)").expect("CATCH_ALL: hard-coded pattern is valid")
});

/// A style together with its compiled span pattern.
#[derive(Debug, Clone)]
pub struct CompiledStyle {
    style: Style,
    pattern: Regex,
}

impl CompiledStyle {
    /// Compile a style's markup into its span pattern.
    pub fn compile(style: Style) -> Result<Self, ConfigError> {
        let pattern = Regex::new(&span_pattern(&style))
            .map_err(|err| ConfigError::Pattern(err.to_string()))?;

        Ok(CompiledStyle { style, pattern })
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Render replacement: wrap the captured contents in a classed span.
    pub fn render_span(&self, contents: &str) -> String {
        format!(
            r#"<{SPAN_TAG} class="{}">{contents}</{SPAN_TAG}>"#,
            self.style.class_attribute()
        )
    }
}

/// Build the span pattern source for a style.
///
/// `m0` is the escaped markup character, `mf` the escaped full markup:
///
/// ```text
/// markup `~`   -->  (?<!~)~(?!~)(?P<contents>[^~]*?)(?<!~)~(?!~)
/// markup `~~`  -->  (?<!~)~~(?!~)(?P<contents>[^~]*?)(?<!~)~~(?!~)
/// markup `~~~` -->  (?<!~)~~~(?!~)(?P<contents>[^~]*?)(?<!~)~~~(?!~)
/// ```
fn span_pattern(style: &Style) -> String {
    let m0 = escape(&style.character().to_string()).into_owned();
    let mf = escape(style.markup()).into_owned();

    format!("(?<!{m0}){mf}(?!{m0})(?P<{CONTENTS}>[^{m0}]*?)(?<!{m0}){mf}(?!{m0})")
}
