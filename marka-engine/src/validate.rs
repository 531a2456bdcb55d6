//! Span-safety validation
//!
//! Markup is applied to raw field text without any block or paragraph
//! parsing, so a delimited span that crosses a line-break or swallows an
//! HTML construct would corrupt structure on substitution. Every capture of
//! the active pattern is therefore required to be plain inline text: no
//! CR/LF/CRLF, and nothing recognizable as inline HTML (a tag, comment,
//! processing instruction, declaration, or entity). This is the strict
//! policy: `*<b>bold</b>*` and `*&amp;*` are both rejected.

use fancy_regex::Regex;
use once_cell::sync::Lazy;

use crate::error::InvalidMarkup;
use crate::pattern::CONTENTS;

/// CR, LF, or CRLF.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("LINE_BREAK: hard-coded pattern is valid")
});

/// Inline HTML constructs: open/close tag, comment, processing instruction,
/// declaration, entity.
static INLINE_HTML: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"</?[A-Za-z][^<>]*>|<!--(?s:(?!<!--|-->).)*-->|<\?[\s\S]*?\?>|<![A-Za-z][^>]*>|&#?[0-9A-Za-z]+;",
    )
    .expect("INLINE_HTML: hard-coded pattern is valid")
});

/// Validate every match of `pattern` against `text`.
///
/// Fails on the first captured span containing a line-break or an inline
/// HTML construct. Substitution must only run after this returns `Ok`.
pub fn validate_spans(pattern: &Regex, text: &str) -> Result<(), InvalidMarkup> {
    for caps in pattern.captures_iter(text) {
        let caps = caps.map_err(scan_error)?;
        let contents = caps.name(CONTENTS).map(|m| m.as_str()).unwrap_or_default();

        if LINE_BREAK.is_match(contents).map_err(scan_error)? {
            return Err(InvalidMarkup::LineBreak);
        }
        if INLINE_HTML.is_match(contents).map_err(scan_error)? {
            return Err(InvalidMarkup::InlineHtml);
        }
    }

    Ok(())
}

fn scan_error(err: fancy_regex::Error) -> InvalidMarkup {
    InvalidMarkup::Scan(err.to_string())
}
