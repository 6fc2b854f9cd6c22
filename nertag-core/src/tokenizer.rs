//! # Tokenizer Seam
//!
//! The formatter does not tokenize; it consumes whatever an upstream word
//! tokenizer produced. This module defines the seam ([`Tokenizer`]) and ships
//! a default adapter ([`StandardTokenizer`]) built on Unicode word
//! boundaries, so the pipeline works out of the box.
//!
//! Contract for any implementation: stable order, deterministic splitting,
//! byte offsets into the original text.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::MarkupError;

/// A token extracted from the original text.
///
/// Offsets are byte positions into the input, which lets callers (e.g. the
/// web UI) highlight entities in the original text without re-searching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text (e.g. "Tim", ",", "Dr.").
    pub text: String,
    /// Starting byte offset in the original text (inclusive).
    pub start: usize,
    /// Ending byte offset in the original text (exclusive).
    pub end: usize,
    /// Sequential position in the token list (0, 1, 2...).
    pub index: usize,
}

/// Splits raw text into an ordered token sequence.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, MarkupError>;
}

/// Abbreviations that keep their trailing period attached ("Dr." stays one
/// token instead of splitting into "Dr" and ".").
const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Rev", "Gen", "Rep", "Sen", "Gov",
    "Capt", "Col", "Sgt", "Lt", "St", "Jr", "Sr", "Inc", "Corp", "Ltd",
    "Co", "Ave", "Blvd", "vs", "etc", "approx", "dept", "est", "vol",
];

/// Default word tokenizer over Unicode word boundaries (UAX #29).
///
/// Whitespace segments are dropped, punctuation becomes standalone tokens,
/// and a period directly following a known abbreviation is folded back into
/// it. Contractions ("don't") and decimal numbers ("3.5") stay whole, which
/// the segmenter already guarantees.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTokenizer;

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, MarkupError> {
        let mut tokens: Vec<Token> = Vec::new();

        for (start, piece) in text.split_word_bound_indices() {
            if piece.chars().all(char::is_whitespace) {
                continue;
            }

            // Fold "Dr" + "." back into "Dr." when adjacent in the input.
            if piece == "." {
                if let Some(prev) = tokens.last_mut() {
                    if prev.end == start && ABBREVIATIONS.contains(&prev.text.as_str()) {
                        prev.text.push('.');
                        prev.end = start + 1;
                        continue;
                    }
                }
            }

            tokens.push(Token {
                text: piece.to_string(),
                start,
                end: start + piece.len(),
                index: 0,
            });
        }

        // Re-index after folding
        for (i, token) in tokens.iter_mut().enumerate() {
            token.index = i;
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_basic_sentence() {
        let tokens = StandardTokenizer.tokenize("Tim went to New York.").unwrap();
        assert_eq!(texts(&tokens), ["Tim", "went", "to", "New", "York", "."]);
    }

    #[test]
    fn test_abbreviation_keeps_period() {
        let tokens = StandardTokenizer.tokenize("Dr. Smith met Mr. Jones.").unwrap();
        assert_eq!(texts(&tokens), ["Dr.", "Smith", "met", "Mr.", "Jones", "."]);
    }

    #[test]
    fn test_punctuation_is_standalone() {
        let tokens = StandardTokenizer.tokenize("Wait, really?").unwrap();
        assert_eq!(texts(&tokens), ["Wait", ",", "really", "?"]);
    }

    #[test]
    fn test_offsets_slice_original_text() {
        let text = "JP Morgan, in New York";
        let tokens = StandardTokenizer.tokenize(text).unwrap();
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_indices_are_sequential() {
        let tokens = StandardTokenizer.tokenize("a b c d").unwrap();
        let indices: Vec<usize> = tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        assert!(StandardTokenizer.tokenize("").unwrap().is_empty());
        assert!(StandardTokenizer.tokenize("   \n\t ").unwrap().is_empty());
    }
}
