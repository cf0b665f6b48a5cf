use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis},
    types::Span,
};

/// Parses one line into a sequence of [`Span`]s.
///
/// Constructs are tried at every position in the order code span, bold, italic.
/// Text between constructs is emitted as `Span::Text`; an empty line yields no
/// spans.
pub fn parse_inline(s: &str) -> Vec<Span> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        let parsed = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_bold(&mut cur))
            .or_else(|| try_parse_italic(&mut cur));
        if let Some(span) = parsed {
            flush_text(&mut out, &s[text_start..start]);
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

fn flush_text(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::Text(text.to_string()));
    }
}

/// Attempts to parse `` `code` `` at the cursor. The content must be non-empty.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let inner_start = cur.pos() + 1;
    let close = cur.find_from(inner_start, &[CodeSpan::TICK])?;
    if close == inner_start {
        return None;
    }
    let inner = cur.s[inner_start..close].to_string();
    cur.jump_to(close + 1);
    Some(Span::Code(inner))
}

/// Attempts to parse `**bold**` at the cursor, closing on the first `**`
/// that leaves at least one byte of content.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Emphasis::STRONG) {
        return None;
    }
    let inner_start = cur.pos() + Emphasis::STRONG.len();
    let close = cur.find_from(inner_start + 1, Emphasis::STRONG)?;
    let inner = cur.s[inner_start..close].to_string();
    cur.jump_to(close + Emphasis::STRONG.len());
    Some(Span::Bold(inner))
}

/// Attempts to parse `*italic*` at the cursor.
///
/// Neither the opening nor the closing star may touch another star.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Emphasis::STAR) || !is_lone_star(cur, cur.pos()) {
        return None;
    }
    let inner_start = cur.pos() + 1;
    let mut j = inner_start + 1;
    while let Some(close) = cur.find_from(j, &[Emphasis::STAR]) {
        if is_lone_star(cur, close) {
            let inner = cur.s[inner_start..close].to_string();
            cur.jump_to(close + 1);
            return Some(Span::Italic(inner));
        }
        j = close + 1;
    }
    None
}

fn is_lone_star(cur: &Cursor<'_>, i: usize) -> bool {
    let before = i.checked_sub(1).and_then(|p| cur.byte_at(p));
    before != Some(Emphasis::STAR) && cur.byte_at(i + 1) != Some(Emphasis::STAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn empty_line_has_no_spans() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn parse_bold_italic_and_code() {
        assert_eq!(
            parse_inline("Spend **$500** on *retargeting* via `meta_ads`"),
            vec![
                text("Spend "),
                Span::Bold("$500".into()),
                text(" on "),
                Span::Italic("retargeting".into()),
                text(" via "),
                Span::Code("meta_ads".into()),
            ]
        );
    }

    #[test]
    fn leftmost_construct_wins() {
        assert_eq!(
            parse_inline("`a **b**` **c**"),
            vec![Span::Code("a **b**".into()), text(" "), Span::Bold("c".into())]
        );
        assert_eq!(
            parse_inline("*x `y` z*"),
            vec![Span::Italic("x `y` z".into())]
        );
    }

    #[test]
    fn unclosed_bold_is_literal() {
        assert_eq!(parse_inline("CPL is **high"), vec![text("CPL is **high")]);
    }

    #[test]
    fn unclosed_bold_is_not_read_as_italic() {
        // Neither star of the unterminated pair may open italics.
        assert_eq!(parse_inline("**a*b*"), vec![text("**a"), Span::Italic("b".into())]);
    }

    #[test]
    fn unclosed_code_span_is_literal() {
        assert_eq!(parse_inline("`unclosed code"), vec![text("`unclosed code")]);
    }

    #[test]
    fn empty_delimiters_are_literal() {
        assert_eq!(parse_inline("``"), vec![text("``")]);
        assert_eq!(parse_inline("****"), vec![text("****")]);
    }

    #[test]
    fn bold_content_may_start_with_star() {
        assert_eq!(parse_inline("***a**"), vec![Span::Bold("*a".into())]);
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            parse_inline("• **Coût** → ok"),
            vec![text("• "), Span::Bold("Coût".into()), text(" → ok")]
        );
    }

    #[test]
    fn plain_text_drops_markup() {
        let spans = parse_inline("a **b** *c* `d`");
        assert_eq!(super::super::plain_text(&spans), "a b c d");
    }
}
