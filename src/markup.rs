//! Paragraph / emphasis markup used by result texts.
//!
//! A text is split on `\n` into paragraphs; whitespace-only lines are dropped.
//! Inside a paragraph, the shortest `**...**` run is an emphasised span and
//! everything between runs is plain. `****` yields an empty emphasis. A `**`
//! with no closing partner is left in the plain text.

const DELIM: &str = "**";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Emphasis(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Span::Plain(s) | Span::Emphasis(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    pub spans: Vec<Span<'a>>,
}

pub fn parse(text: &str) -> Vec<Paragraph<'_>> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| Paragraph {
            spans: split_spans(line),
        })
        .collect()
}

fn split_spans(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(DELIM) {
        let body_start = open + DELIM.len();
        let Some(close_rel) = rest[body_start..].find(DELIM) else {
            break;
        };
        let close = body_start + close_rel;

        if open > 0 {
            spans.push(Span::Plain(&rest[..open]));
        }
        spans.push(Span::Emphasis(&rest[body_start..close]));
        rest = &rest[close + DELIM.len()..];
    }

    if !rest.is_empty() {
        spans.push(Span::Plain(rest));
    }
    spans
}

/// True when every `**` in the text is paired within its paragraph.
pub fn is_balanced(text: &str) -> bool {
    parse(text).iter().all(|p| {
        p.spans.iter().all(|span| match span {
            Span::Plain(s) => !s.contains(DELIM),
            Span::Emphasis(_) => true,
        })
    })
}

/// Drops the emphasis markers. Paragraphs are separated by a blank line.
pub fn strip(text: &str) -> String {
    parse(text)
        .iter()
        .map(|p| p.spans.iter().map(Span::text).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_then_paragraph_break() {
        let paragraphs = parse("**foo**\nbar");
        assert_eq!(
            paragraphs,
            vec![
                Paragraph {
                    spans: vec![Span::Emphasis("foo")]
                },
                Paragraph {
                    spans: vec![Span::Plain("bar")]
                },
            ]
        );
    }

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(parse("a\n   \n\nb").len(), 2);
    }

    #[test]
    fn unmatched_delimiter_stays_plain() {
        let paragraphs = parse("a **b** c **d");
        assert_eq!(
            paragraphs[0].spans,
            vec![
                Span::Plain("a "),
                Span::Emphasis("b"),
                Span::Plain(" c **d")
            ]
        );
        assert!(!is_balanced("a **b** c **d"));
        assert!(is_balanced("a **b** c"));
    }

    #[test]
    fn strip_removes_markers() {
        assert_eq!(strip("x **y** z\n\n**w**"), "x y z\n\nw");
    }
}
