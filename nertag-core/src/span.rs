//! # Span Merging and Markup Rendering
//!
//! The heart of the crate: turns a flat sequence of (token, label) pairs into
//! a human-readable string with inline entity markup.
//!
//! ## Algorithm
//!
//! 1. Normalize each raw label into an [`EntityLabel`] at ingestion.
//! 2. Scan left to right, accumulating consecutive tokens that share a label
//!    into the current [`Span`]; flush it whenever the label changes.
//! 3. Render each span: recognized categories are wrapped in
//!    `<Tag>...</Tag>`, everything else is emitted verbatim.
//! 4. Join the rendered spans with single spaces.
//!
//! Spans partition the input: no token is lost or duplicated, no span
//! overlaps another, and original order is preserved. Each span carries
//! exactly one label, so the output can never contain nested tags.
//!
//! ## Example
//!
//! ```rust
//! use nertag_core::span::format_tagged;
//!
//! let tagged = [
//!     ("Jim", "PERSON"),
//!     ("works", "O"),
//!     ("at", "O"),
//!     ("Acme", "ORGANIZATION"),
//!     ("Corp.", "ORGANIZATION"),
//! ];
//! let out = format_tagged(&tagged).unwrap();
//! assert_eq!(out, "<Person>Jim</Person> works at <Organization>Acme Corp.</Organization>");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MarkupError;
use crate::label::EntityLabel;

/// A maximal run of consecutive tokens sharing one normalized label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Constituent token texts, in original order.
    pub tokens: Vec<String>,
    /// The label shared by every token in the span.
    pub label: EntityLabel,
}

impl Span {
    fn open(token: &str, label: EntityLabel) -> Self {
        Span {
            tokens: vec![token.to_string()],
            label,
        }
    }

    /// The span's text: constituent tokens joined by a single space.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }

    /// Renders the span: `<Tag>text</Tag>` for recognized categories,
    /// bare text otherwise.
    pub fn render(&self) -> String {
        let text = self.text();
        match self.label.tag_name() {
            Some(tag) => format!("<{tag}>{text}</{tag}>"),
            None => text,
        }
    }
}

/// Merges adjacent equal-label tagged tokens into spans.
///
/// Raw labels are normalized via [`EntityLabel::from_raw`] before comparison,
/// so `"PERSON"` and `"Person"` merge even if the upstream classifier is
/// inconsistent about casing. Non-adjacent runs with the same label stay
/// separate spans — adjacency is the only merge criterion.
///
/// An empty input yields an empty span list; callers that require a
/// non-empty sequence check before merging (see [`format_tagged`]).
pub fn merge_spans<S: AsRef<str>>(tagged: &[(S, S)]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut current: Option<Span> = None;

    for (token, raw_label) in tagged {
        let label = EntityLabel::from_raw(raw_label.as_ref());
        match current.as_mut() {
            Some(span) if span.label == label => span.tokens.push(token.as_ref().to_string()),
            _ => {
                let opened = Span::open(token.as_ref(), label);
                if let Some(closed) = current.replace(opened) {
                    spans.push(closed);
                }
            }
        }
    }
    if let Some(closed) = current {
        spans.push(closed);
    }

    spans
}

/// Renders a span list into the final annotated string, space-joined.
pub fn render_spans(spans: &[Span]) -> String {
    spans.iter().map(Span::render).collect::<Vec<_>>().join(" ")
}

/// Formats a sequence of (token, raw label) pairs into annotated text.
///
/// This is the primary entry point for classifier output that arrives as
/// pairs. Fails with [`MarkupError::EmptyInput`] if the sequence is empty.
pub fn format_tagged<S: AsRef<str>>(tagged: &[(S, S)]) -> Result<String, MarkupError> {
    if tagged.is_empty() {
        return Err(MarkupError::EmptyInput);
    }
    Ok(render_spans(&merge_spans(tagged)))
}

/// Formats parallel token and label sequences into annotated text.
///
/// Fails with [`MarkupError::LengthMismatch`] if the sequences differ in
/// length, or [`MarkupError::EmptyInput`] if they are empty — both indicate
/// a broken upstream contract rather than a recoverable condition.
pub fn format_aligned<A, B>(tokens: &[A], labels: &[B]) -> Result<String, MarkupError>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if tokens.len() != labels.len() {
        return Err(MarkupError::LengthMismatch {
            tokens: tokens.len(),
            labels: labels.len(),
        });
    }
    let pairs: Vec<(&str, &str)> = tokens
        .iter()
        .zip(labels.iter())
        .map(|(t, l)| (t.as_ref(), l.as_ref()))
        .collect();
    format_tagged(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(t, l)| (t.to_string(), l.to_string()))
            .collect()
    }

    #[test]
    fn test_format_full_sentence() {
        let tagged = pairs(&[
            ("Tim", "PERSON"),
            ("went", "O"),
            ("to", "O"),
            ("JP", "ORGANIZATION"),
            ("Morgan", "ORGANIZATION"),
            ("office", "O"),
            ("in", "O"),
            ("New", "LOCATION"),
            ("York", "LOCATION"),
            (".", "O"),
        ]);
        let out = format_tagged(&tagged).unwrap();
        assert_eq!(
            out,
            "<Person>Tim</Person> went to <Organization>JP Morgan</Organization> \
             office in <Location>New York</Location> ."
        );
    }

    #[test]
    fn test_no_entities_reconstructs_text() {
        let tagged = pairs(&[("the", "O"), ("quick", "O"), ("fox", "O"), (".", "O")]);
        let out = format_tagged(&tagged).unwrap();
        assert_eq!(out, "the quick fox .");
    }

    #[test]
    fn test_single_token_span() {
        let tagged = pairs(&[("Acme", "ORGANIZATION")]);
        let out = format_tagged(&tagged).unwrap();
        assert_eq!(out, "<Organization>Acme</Organization>");
    }

    #[test]
    fn test_all_same_label_is_one_span() {
        let tagged = pairs(&[("New", "LOCATION"), ("York", "LOCATION"), ("City", "LOCATION")]);
        let out = format_tagged(&tagged).unwrap();
        assert_eq!(out, "<Location>New York City</Location>");
    }

    #[test]
    fn test_empty_input_fails() {
        let tagged: Vec<(String, String)> = vec![];
        assert!(matches!(
            format_tagged(&tagged),
            Err(MarkupError::EmptyInput)
        ));
    }

    #[test]
    fn test_length_mismatch_fails() {
        let tokens = ["Tim", "went"];
        let labels = ["PERSON"];
        assert!(matches!(
            format_aligned(&tokens, &labels),
            Err(MarkupError::LengthMismatch { tokens: 2, labels: 1 })
        ));
    }

    #[test]
    fn test_format_aligned_matches_pairs() {
        let tokens = ["Angela", "Merkel", "visited", "Paris"];
        let labels = ["PERSON", "PERSON", "O", "LOCATION"];
        let out = format_aligned(&tokens, &labels).unwrap();
        assert_eq!(
            out,
            "<Person>Angela Merkel</Person> visited <Location>Paris</Location>"
        );
    }

    #[test]
    fn test_unrecognized_label_passes_through() {
        let tagged = pairs(&[
            ("World", "MISC"),
            ("Cup", "MISC"),
            ("starts", "O"),
            ("today", "O"),
        ]);
        let out = format_tagged(&tagged).unwrap();
        assert_eq!(out, "World Cup starts today");
        assert!(!out.contains('<'));
    }

    #[test]
    fn test_case_insensitive_label_merge() {
        let tagged = pairs(&[("new", "location"), ("york", "LOCATION")]);
        let out = format_tagged(&tagged).unwrap();
        assert_eq!(out, "<Location>new york</Location>");
    }

    #[test]
    fn test_non_adjacent_same_label_stays_separate() {
        let tagged = pairs(&[
            ("Tim", "PERSON"),
            ("met", "O"),
            ("Mary", "PERSON"),
        ]);
        let out = format_tagged(&tagged).unwrap();
        assert_eq!(out, "<Person>Tim</Person> met <Person>Mary</Person>");
    }

    #[test]
    fn test_spans_partition_input() {
        let tagged = pairs(&[
            ("Jim", "PERSON"),
            ("bought", "O"),
            ("300", "O"),
            ("shares", "O"),
            ("of", "O"),
            ("Acme", "ORGANIZATION"),
            ("Corp.", "ORGANIZATION"),
            ("in", "O"),
            ("2006", "O"),
            (".", "O"),
        ]);
        let spans = merge_spans(&tagged);

        // Every token appears exactly once, in order.
        let flattened: Vec<&str> = spans
            .iter()
            .flat_map(|s| s.tokens.iter().map(String::as_str))
            .collect();
        let originals: Vec<&str> = tagged.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(flattened, originals);

        // Adjacent spans never share a label.
        for pair in spans.windows(2) {
            assert_ne!(pair[0].label, pair[1].label);
        }
    }

    #[test]
    fn test_no_nested_tags() {
        let tagged = pairs(&[
            ("Tim", "PERSON"),
            ("Cook", "PERSON"),
            ("leads", "O"),
            ("Apple", "ORGANIZATION"),
        ]);
        let out = format_tagged(&tagged).unwrap();
        // Tags never touch: each span carries one label, renders once.
        assert!(!out.contains("<<"));
        assert!(!out.contains("><"));
        assert_eq!(
            out,
            "<Person>Tim Cook</Person> leads <Organization>Apple</Organization>"
        );
    }

    #[test]
    fn test_span_json_shape() {
        let span = Span {
            tokens: vec!["New".to_string(), "York".to_string()],
            label: EntityLabel::Location,
        };
        let value = serde_json::to_value(&span).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"tokens": ["New", "York"], "label": "Location"})
        );
    }

    #[test]
    fn test_span_render() {
        let span = Span {
            tokens: vec!["San".to_string(), "Francisco".to_string()],
            label: EntityLabel::Location,
        };
        assert_eq!(span.text(), "San Francisco");
        assert_eq!(span.render(), "<Location>San Francisco</Location>");

        let plain = Span {
            tokens: vec!["hello".to_string()],
            label: EntityLabel::Other,
        };
        assert_eq!(plain.render(), "hello");
    }
}
