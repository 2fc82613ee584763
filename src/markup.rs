/// Kind of a rendered fragment, for the display layer to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain task text
    Text,
    /// An inline `#tag` (hash included in the span text)
    Tag,
}

/// One styled fragment of a rendered task line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSpan {
    pub text: String,
    pub kind: SpanKind,
}

/// Rendering boundary between task text and the display layer.
///
/// The filtering/sorting core never depends on this; only the views do.
/// `source_path` is available for renderers that resolve relative links.
pub trait MarkdownRenderer {
    fn render_to_markup(&self, text: &str, source_path: &str) -> Vec<MarkupSpan>;
}

/// Default renderer: passes text through, splitting out `#tags` so the
/// theme can color them. Inline markdown stays as plain text.
pub struct TagHighlighter;

impl MarkdownRenderer for TagHighlighter {
    fn render_to_markup(&self, text: &str, _source_path: &str) -> Vec<MarkupSpan> {
        let mut spans = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;

        while let Some(hash) = text[pos..].find('#') {
            let hash = pos + hash;
            let tag_end = text[hash + 1..]
                .find(|c: char| c.is_whitespace() || c == '#')
                .map(|i| hash + 1 + i)
                .unwrap_or(text.len());
            // A bare `#` with no word attached is plain text
            if tag_end == hash + 1 {
                pos = hash + 1;
                continue;
            }
            if hash > plain_start {
                spans.push(MarkupSpan {
                    text: text[plain_start..hash].to_string(),
                    kind: SpanKind::Text,
                });
            }
            spans.push(MarkupSpan {
                text: text[hash..tag_end].to_string(),
                kind: SpanKind::Tag,
            });
            plain_start = tag_end;
            pos = tag_end;
        }

        if plain_start < text.len() {
            spans.push(MarkupSpan {
                text: text[plain_start..].to_string(),
                kind: SpanKind::Text,
            });
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> Vec<MarkupSpan> {
        TagHighlighter.render_to_markup(text, "notes.md")
    }

    fn span(text: &str, kind: SpanKind) -> MarkupSpan {
        MarkupSpan {
            text: text.to_string(),
            kind,
        }
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(render("Buy milk"), vec![span("Buy milk", SpanKind::Text)]);
    }

    #[test]
    fn tags_are_split_out() {
        assert_eq!(
            render("Buy milk #next"),
            vec![
                span("Buy milk ", SpanKind::Text),
                span("#next", SpanKind::Tag),
            ]
        );
    }

    #[test]
    fn mid_text_and_multiple_tags() {
        assert_eq!(
            render("#waiting on Sam #errand today"),
            vec![
                span("#waiting", SpanKind::Tag),
                span(" on Sam ", SpanKind::Text),
                span("#errand", SpanKind::Tag),
                span(" today", SpanKind::Text),
            ]
        );
    }

    #[test]
    fn bare_hash_is_plain_text() {
        assert_eq!(
            render("issue # 42"),
            vec![span("issue # 42", SpanKind::Text)]
        );
    }

    #[test]
    fn empty_text_renders_empty() {
        assert_eq!(render(""), Vec::<MarkupSpan>::new());
    }
}
