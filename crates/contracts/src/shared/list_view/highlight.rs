/// A run of text, marked when it matches the search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into matched and unmatched runs of `query` (case-insensitive).
///
/// Text containing characters whose lowercase form has a different byte
/// length is returned unsplit, since offsets found in the lowered text would
/// not map back onto it.
pub fn highlight_segments<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let plain = || {
        vec![Segment {
            text,
            matched: false,
        }]
    };

    if query.is_empty() || text.is_empty() {
        return plain();
    }

    let stable = text
        .chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8());
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    if !stable || !text_lower.contains(&query_lower) {
        return plain();
    }

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(pos) = text_lower[last..].find(&query_lower) {
        let start = last + pos;
        let end = start + query_lower.len();
        if start > last {
            segments.push(Segment {
                text: &text[last..start],
                matched: false,
            });
        }
        segments.push(Segment {
            text: &text[start..end],
            matched: true,
        });
        last = end;
    }
    if last < text.len() {
        segments.push(Segment {
            text: &text[last..],
            matched: false,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment<'_>]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.matched {
                    format!("[{}]", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect()
    }

    #[test]
    fn test_marks_every_occurrence() {
        let segments = highlight_segments("VISION - SQL19 on sql19", "sql");
        assert_eq!(render(&segments), "VISION - [SQL]19 on [sql]19");
    }

    #[test]
    fn test_no_query_or_no_match_returns_plain_text() {
        assert_eq!(render(&highlight_segments("sql19", "")), "sql19");
        assert_eq!(render(&highlight_segments("sql19", "pg")), "sql19");
        assert_eq!(highlight_segments("sql19", "pg").len(), 1);
    }

    #[test]
    fn test_whole_text_match() {
        let segments = highlight_segments("TEST", "test");
        assert_eq!(
            segments,
            vec![Segment {
                text: "TEST",
                matched: true
            }]
        );
    }

    #[test]
    fn test_length_changing_lowercase_is_left_unsplit() {
        // 'İ' lowercases to two code points.
        let segments = highlight_segments("İstanbul sales", "sales");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].matched);
    }
}
