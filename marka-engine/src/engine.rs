//! The markup engine
//!
//! [`MarkupEngine`] owns the ordered list of compiled styles and the three
//! operations over field text: `mark`, `unmark` and `render`. Styles are
//! applied in declaration order, each substitution running over the output
//! of the previous one, so later styles see earlier styles' rendered output
//! rather than their raw markup. Validation of a style's matches always
//! completes before that style substitutes, so a failing call never returns
//! partial output.

use fancy_regex::Captures;

use crate::error::{ConfigError, InvalidMarkup};
use crate::pattern::{CompiledStyle, CATCH_ALL, CONTENTS};
use crate::style::Style;
use crate::validate::validate_spans;

enum Substitution {
    Render,
    Unmark,
}

/// Applies an ordered list of styles to mark, unmark and render field text.
///
/// Built once from validated styles and immutable afterwards; every
/// operation is a pure function of its input string, so an engine can be
/// shared across threads without locking.
#[derive(Debug, Clone)]
pub struct MarkupEngine {
    styles: Vec<CompiledStyle>,
}

impl MarkupEngine {
    /// Compile `styles` into an engine.
    ///
    /// Order is significant: it decides both menu order and the order in
    /// which substitutions are applied.
    pub fn new(styles: Vec<Style>) -> Result<Self, ConfigError> {
        if styles.is_empty() {
            return Err(ConfigError::NoStyles);
        }

        let styles = styles
            .into_iter()
            .map(CompiledStyle::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MarkupEngine { styles })
    }

    /// The configured styles, in application order.
    pub fn styles(&self) -> impl Iterator<Item = &Style> + '_ {
        self.styles.iter().map(CompiledStyle::style)
    }

    /// Look a style up by its display name.
    pub fn find_style(&self, name: &str) -> Option<&Style> {
        self.styles().find(|style| style.name() == name)
    }

    /// Surround `text` with `markup`.
    ///
    /// `The lazy dog` → `==The lazy dog==`
    ///
    /// The whole string is validated as a single span first; no HTML
    /// escaping is performed, the markup is simply concatenated.
    pub fn mark(&self, text: &str, markup: &str) -> Result<String, InvalidMarkup> {
        validate_spans(&CATCH_ALL, text)?;

        Ok(format!("{markup}{text}{markup}"))
    }

    /// Strip `text` of all recognized markup.
    ///
    /// `The ==lazy== dog` → `The lazy dog`
    pub fn unmark(&self, text: &str) -> Result<String, InvalidMarkup> {
        self.substitute(text, Substitution::Unmark)
    }

    /// Render all recognized markup in `text` into classed spans.
    ///
    /// `The ==lazy== dog` → `The <span class="highlight">lazy</span> dog`
    pub fn render(&self, text: &str) -> Result<String, InvalidMarkup> {
        self.substitute(text, Substitution::Render)
    }

    fn substitute(&self, text: &str, mode: Substitution) -> Result<String, InvalidMarkup> {
        let mut output = text.to_string();

        for compiled in &self.styles {
            validate_spans(compiled.pattern(), &output)?;

            // The pattern was just scanned over this exact string, so
            // replacement cannot hit a match error.
            output = compiled
                .pattern()
                .replace_all(&output, |caps: &Captures| {
                    let contents = caps.name(CONTENTS).map(|m| m.as_str()).unwrap_or_default();
                    match mode {
                        Substitution::Render => compiled.render_span(contents),
                        Substitution::Unmark => contents.to_string(),
                    }
                })
                .into_owned();
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MarkupEngine {
        let styles = vec![
            Style::new("Accent", "*", vec!["accent".to_string()]).unwrap(),
            Style::new("Bold", "**", vec!["bold".to_string()]).unwrap(),
        ];
        MarkupEngine::new(styles).unwrap()
    }

    #[test]
    fn empty_style_list_is_a_config_error() {
        assert!(matches!(
            MarkupEngine::new(vec![]),
            Err(ConfigError::NoStyles)
        ));
    }

    #[test]
    fn mark_concatenates_markup() {
        assert_eq!(
            engine().mark("The lazy dog", "=="),
            Ok("==The lazy dog==".to_string())
        );
    }

    #[test]
    fn mark_rejects_unsafe_text() {
        assert_eq!(
            engine().mark("lazy\ndog", "=="),
            Err(InvalidMarkup::LineBreak)
        );
        assert_eq!(
            engine().mark("<b>dog</b>", "=="),
            Err(InvalidMarkup::InlineHtml)
        );
    }

    #[test]
    fn find_style_by_name() {
        let engine = engine();
        assert_eq!(engine.find_style("Bold").map(Style::markup), Some("**"));
        assert!(engine.find_style("Nope").is_none());
    }

    #[test]
    fn styles_keep_declaration_order() {
        let engine = engine();
        let names: Vec<_> = engine.styles().map(Style::name).collect();
        assert_eq!(names, vec!["Accent", "Bold"]);
    }

    #[test]
    fn render_wraps_contents() {
        insta::assert_snapshot!(
            engine().render("The *lazy* dog").unwrap(),
            @r#"The <span class="accent">lazy</span> dog"#
        );
    }

    #[test]
    fn unmark_strips_markup() {
        assert_eq!(
            engine().unmark("The *lazy* **dog**"),
            Ok("The lazy dog".to_string())
        );
    }

    #[test]
    fn failing_call_returns_no_partial_output() {
        // The `*` span is fine, the `**` span holds a tag: the whole call
        // must fail, not return a half-substituted string.
        let result = engine().render("*ok* **<b>bad</b>**");
        assert_eq!(result, Err(InvalidMarkup::InlineHtml));
    }
}
