//! Подсветка совпадений строки поиска в названиях (case- и accent-insensitive)
//!
//! Highlighting is weight-only: matched parts render bold, the rest regular.

use leptos::prelude::*;
use std::ops::Range;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

pub const HIGHLIGHT_WEIGHT: u16 = 700;
pub const REGULAR_WEIGHT: u16 = 400;

/// Часть подписи: текст и признак совпадения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightPart {
    pub text: String,
    pub highlight: bool,
}

impl HighlightPart {
    pub fn font_weight(&self) -> u16 {
        if self.highlight {
            HIGHLIGHT_WEIGHT
        } else {
            REGULAR_WEIGHT
        }
    }
}

/// Comparison key of a single char: accents stripped, lowercased.
///
/// A char folds to its canonical base only when the rest of its
/// decomposition is combining marks (`ó` → `o`); Hangul syllables and other
/// multi-letter decompositions stay as they are.
fn fold(c: char) -> char {
    let mut parts = Vec::with_capacity(2);
    decompose_canonical(c, |d| parts.push(d));
    let base = match parts.split_first() {
        Some((&base, marks)) if marks.iter().all(|&m| is_combining_mark(m)) => base,
        _ => c,
    };
    base.to_lowercase().next().unwrap_or(base)
}

/// Byte ranges of `text` matched by any whitespace-separated token of `query`.
///
/// Every occurrence of every token counts. Ranges come back sorted, with
/// overlapping and touching ranges merged.
pub fn match_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    // Standalone combining marks are skipped, so a match ending on a base
    // letter also covers the accents written after it.
    let chars: Vec<(usize, char)> = text
        .char_indices()
        .filter(|&(_, c)| !is_combining_mark(c))
        .collect();
    let mut ranges = Vec::new();

    for token in query.split_whitespace() {
        let needle: Vec<char> = token
            .chars()
            .filter(|&c| !is_combining_mark(c))
            .map(fold)
            .collect();
        if needle.is_empty() || needle.len() > chars.len() {
            continue;
        }

        for start in 0..=chars.len() - needle.len() {
            let window = &chars[start..start + needle.len()];
            let is_match = window
                .iter()
                .zip(&needle)
                .all(|((_, c), n)| fold(*c) == *n);
            if is_match {
                let begin = chars[start].0;
                let end = chars
                    .get(start + needle.len())
                    .map(|(idx, _)| *idx)
                    .unwrap_or(text.len());
                ranges.push(begin..end);
            }
        }
    }

    merge_ranges(ranges)
}

fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Split `text` into consecutive parts according to sorted, disjoint `ranges`
pub fn parse_highlight(text: &str, ranges: &[Range<usize>]) -> Vec<HighlightPart> {
    let mut parts = Vec::new();
    let mut last_pos = 0;

    for range in ranges {
        if range.start > last_pos {
            parts.push(HighlightPart {
                text: text[last_pos..range.start].to_string(),
                highlight: false,
            });
        }
        parts.push(HighlightPart {
            text: text[range.start..range.end].to_string(),
            highlight: true,
        });
        last_pos = range.end;
    }

    if last_pos < text.len() {
        parts.push(HighlightPart {
            text: text[last_pos..].to_string(),
            highlight: false,
        });
    }

    parts
}

/// Подпись варианта с выделением совпадений жирным
pub fn highlighted_label(text: &str, query: &str) -> AnyView {
    let parts = parse_highlight(text, &match_ranges(text, query));

    view! {
        <div>
            {parts
                .into_iter()
                .map(|part| {
                    let style = format!("font-weight: {};", part.font_weight());
                    view! { <span style=style>{part.text}</span> }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(text: &str, highlight: bool) -> HighlightPart {
        HighlightPart {
            text: text.to_string(),
            highlight,
        }
    }

    #[test]
    fn test_prefix_is_heavier_than_rest() {
        let parts = parse_highlight("Daft Punk", &match_ranges("Daft Punk", "Da"));
        assert_eq!(parts, vec![part("Da", true), part("ft Punk", false)]);
        assert!(parts[0].font_weight() > parts[1].font_weight());
        assert_eq!(parts[0].font_weight(), 700);
        assert_eq!(parts[1].font_weight(), 400);
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(match_ranges("Daft Punk", "PUN"), vec![5..8]);
        assert_eq!(match_ranges("Daft Punk", "aft"), vec![1..4]);
    }

    #[test]
    fn test_every_occurrence_is_highlighted() {
        let parts = parse_highlight("Abba", &match_ranges("Abba", "b"));
        assert_eq!(parts, vec![part("A", false), part("bb", true), part("a", false)]);
    }

    #[test]
    fn test_tokens_are_matched_independently() {
        let ranges = match_ranges("Daft Punk", "punk daft");
        assert_eq!(ranges, vec![0..4, 5..9]);
    }

    #[test]
    fn test_overlapping_tokens_merge() {
        assert_eq!(match_ranges("Radiohead", "radio diohe"), vec![0..7]);
    }

    #[test]
    fn test_blank_query_highlights_nothing() {
        assert!(match_ranges("Daft Punk", "   ").is_empty());
        assert_eq!(
            parse_highlight("Daft Punk", &[]),
            vec![part("Daft Punk", false)]
        );
    }

    #[test]
    fn test_query_longer_than_text() {
        assert!(match_ranges("Air", "Airbag").is_empty());
    }

    #[test]
    fn test_non_ascii_boundaries() {
        let text = "Sigur Rós";
        let ranges = match_ranges(text, "RÓS");
        assert_eq!(ranges, vec![6..10]);
        let parts = parse_highlight(text, &ranges);
        assert_eq!(parts, vec![part("Sigur ", false), part("Rós", true)]);
    }

    #[test]
    fn test_accents_are_ignored() {
        let text = "Sigur Rós";
        assert_eq!(match_ranges(text, "ros"), vec![6..10]);
        assert_eq!(match_ranges("Beyonce", "Beyoncé"), vec![0..7]);
        assert_eq!(match_ranges("Motörhead", "MOTOR"), vec![0..6]);
    }

    #[test]
    fn test_decomposed_accent_stays_inside_match() {
        // "Ro" + U+0301 + "s"
        let text = "Ro\u{301}s";
        assert_eq!(match_ranges(text, "ro"), vec![0..4]);
        let parts = parse_highlight(text, &match_ranges(text, "ro"));
        assert_eq!(parts, vec![part("Ro\u{301}", true), part("s", false)]);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_highlight("", &match_ranges("", "a")).is_empty());
    }
}
