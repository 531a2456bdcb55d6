//! Literal mark/unmark/render scenarios, strict validation policy.

use marka_engine::{InvalidMarkup, MarkupEngine, Style};

fn style(name: &str, markup: &str, classnames: &[&str]) -> Style {
    Style::new(
        name,
        markup,
        classnames.iter().map(|c| c.to_string()).collect(),
    )
    .expect("test style is valid")
}

/// Style0..Style3 with a shared parent classname, as a user config with
/// `parent-classnames: ["parent-style"]` produces.
fn engine() -> MarkupEngine {
    MarkupEngine::new(vec![
        style("Style0", "*", &["parent-style", "style0"]),
        style("Style1", "**", &["parent-style", "style1"]),
        style("Style2", "~", &["parent-style", "style2"]),
        style("Style3", "~~", &["parent-style", "style3"]),
    ])
    .expect("test engine builds")
}

#[test]
fn renders_and_unmarks_all_styles() {
    let marked = " *Style0* **Style1** ~Style2~ ~~Style3~~ ";

    let rendered = concat!(
        " <span class=\"parent-style style0\">Style0</span>",
        " <span class=\"parent-style style1\">Style1</span>",
        " <span class=\"parent-style style2\">Style2</span>",
        " <span class=\"parent-style style3\">Style3</span> ",
    );
    let unmarked = " Style0 Style1 Style2 Style3 ";

    assert_eq!(engine().render(marked), Ok(rendered.to_string()));
    assert_eq!(engine().unmark(marked), Ok(unmarked.to_string()));
}

#[test]
fn delimiters_sharing_a_character_never_cross_match() {
    let marked = "*abcd* **abcd**";

    let rendered = concat!(
        "<span class=\"parent-style style0\">abcd</span> ",
        "<span class=\"parent-style style1\">abcd</span>",
    );

    assert_eq!(engine().render(marked), Ok(rendered.to_string()));
    assert_eq!(engine().unmark(marked), Ok("abcd abcd".to_string()));
}

#[test]
fn double_markup_matches_only_the_double_style() {
    // `**abcd**` is one Style1 span; Style0 must not find a zero- or
    // partial-length span inside it.
    assert_eq!(
        engine().render("**abcd**"),
        Ok("<span class=\"parent-style style1\">abcd</span>".to_string())
    );
}

#[test]
fn earlier_styles_apply_before_later_ones() {
    // Style0 substitutes first; Style3 then operates on the already
    // substituted text and must not re-match inside Style0's output.
    let marked = "~~a~~ *b*";
    let rendered = concat!(
        "<span class=\"parent-style style3\">a</span> ",
        "<span class=\"parent-style style0\">b</span>",
    );
    assert_eq!(engine().render(marked), Ok(rendered.to_string()));
}

#[test]
fn marking_wraps_text_in_markup() {
    assert_eq!(
        engine().mark("The lazy dog", "=="),
        Ok("==The lazy dog==".to_string())
    );
    assert_eq!(engine().mark(" spaced ", "~~"), Ok("~~ spaced ~~".to_string()));
}

#[test]
fn line_breaks_inside_a_span_are_rejected() {
    let marked = " *ABC\nABC* ";

    assert_eq!(engine().render(marked), Err(InvalidMarkup::LineBreak));
    assert_eq!(engine().unmark(marked), Err(InvalidMarkup::LineBreak));
}

#[test]
fn spans_on_separate_lines_are_fine() {
    // The line-break sits between the spans, not inside a capture.
    let marked = " *ABC*\n*ABC* ";
    assert_eq!(
        engine().unmark(marked),
        Ok(" ABC\nABC ".to_string())
    );
}

#[test]
fn html_inside_a_span_is_rejected() {
    for marked in [
        " *<b>ABC</b>* ",
        " *ABC <!-- x --> ABC* ",
        " *&amp;* ",
        " *&#38;* ",
        " *&#x26;* ",
    ] {
        assert_eq!(
            engine().render(marked),
            Err(InvalidMarkup::InlineHtml),
            "{marked:?} should be rejected"
        );
        assert_eq!(engine().unmark(marked), Err(InvalidMarkup::InlineHtml));
    }
}

#[test]
fn html_outside_any_span_passes_through() {
    // Tags between spans are never captured, so they survive untouched.
    let marked = "*ABC* <div><p><strong>abc</strong></p></div> *ABC*";

    let rendered = concat!(
        "<span class=\"parent-style style0\">ABC</span>",
        " <div><p><strong>abc</strong></p></div> ",
        "<span class=\"parent-style style0\">ABC</span>",
    );

    assert_eq!(engine().render(marked), Ok(rendered.to_string()));
    assert_eq!(
        engine().unmark(marked),
        Ok("ABC <div><p><strong>abc</strong></p></div> ABC".to_string())
    );
}

#[test]
fn mark_rejects_unsafe_selections() {
    assert_eq!(
        engine().mark("ABC\nABC", "*"),
        Err(InvalidMarkup::LineBreak)
    );
    assert_eq!(
        engine().mark("<b>ABC</b>", "*"),
        Err(InvalidMarkup::InlineHtml)
    );
}

#[test]
fn unpaired_markup_is_left_alone() {
    assert_eq!(engine().unmark("a * b"), Ok("a * b".to_string()));
    assert_eq!(engine().render("a * b"), Ok("a * b".to_string()));
}

#[test]
fn stripping_can_expose_a_longer_delimiter_to_a_later_style() {
    // Style0 strips its span first, joining the leftover `*` runs into
    // `**…**`, which Style1 then consumes.
    assert_eq!(engine().unmark("**a* b *c**"), Ok("a b c".to_string()));
}
