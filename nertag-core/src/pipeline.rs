//! # Annotation Pipeline
//!
//! Thin orchestration over the two collaborators: text is tokenized, the
//! tagger labels each token, and the span formatter renders the annotated
//! string. The pipeline adds no branching of its own — it sequences the
//! stages and surfaces collaborator failures unchanged.
//!
//! Data flows strictly forward:
//!
//! ```text
//! text -> tokens -> (token, label) pairs -> annotated string
//! ```

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::MarkupError;
use crate::span::{self, Span};
use crate::tagger::{GazetteerTagger, TaggedToken, Tagger};
use crate::tokenizer::{StandardTokenizer, Tokenizer};

/// Full result of an annotation run, for callers that want more than the
/// final string (e.g. the web UI highlighting individual spans).
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    /// The annotated string with inline `<Person>`-style markup.
    pub annotated: String,
    /// The merged spans backing the annotated string, in order.
    pub spans: Vec<Span>,
    /// Number of tokens the tokenizer produced.
    pub total_tokens: usize,
    /// Wall-clock time spent in the pipeline.
    pub processing_ms: u64,
}

/// The annotation pipeline: tokenizer → tagger → span formatter.
///
/// Generic over both collaborators so callers can plug in their own
/// tokenizer or a tagger backed by a real classifier; the defaults
/// ([`StandardTokenizer`], [`GazetteerTagger`]) make the pipeline usable
/// out of the box.
///
/// Each call operates on its own local state and the formatter is pure, so
/// a `NerAnnotator` can serve any number of concurrent calls without
/// coordination.
pub struct NerAnnotator<T = StandardTokenizer, G = GazetteerTagger> {
    tokenizer: T,
    tagger: G,
}

impl NerAnnotator {
    /// Builds the default pipeline with the bundled tokenizer and the demo
    /// gazetteer tagger.
    pub fn new() -> Self {
        Self {
            tokenizer: StandardTokenizer,
            tagger: GazetteerTagger::default(),
        }
    }
}

impl Default for NerAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer, G: Tagger> NerAnnotator<T, G> {
    /// Builds a pipeline from explicit collaborators.
    pub fn with_parts(tokenizer: T, tagger: G) -> Self {
        Self { tokenizer, tagger }
    }

    /// Annotates `text`, returning the marked-up string.
    ///
    /// Fails if either collaborator fails, if the tagger violates the
    /// one-label-per-token contract, or if the text tokenizes to nothing.
    pub fn annotate(&self, text: &str) -> Result<String, MarkupError> {
        let tagged = self.run_collaborators(text)?;
        let pairs = as_pairs(&tagged);
        span::format_tagged(&pairs)
    }

    /// Annotates `text` and returns the structured result alongside the
    /// annotated string.
    pub fn annotate_detailed(&self, text: &str) -> Result<Annotation, MarkupError> {
        let start = Instant::now();
        let tagged = self.run_collaborators(text)?;
        if tagged.is_empty() {
            return Err(MarkupError::EmptyInput);
        }
        let pairs = as_pairs(&tagged);
        let spans = span::merge_spans(&pairs);
        Ok(Annotation {
            annotated: span::render_spans(&spans),
            total_tokens: tagged.len(),
            spans,
            processing_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Annotates independent documents in parallel.
    ///
    /// Results keep the input order; each document succeeds or fails on its
    /// own.
    pub fn annotate_batch(&self, texts: &[String]) -> Vec<Result<String, MarkupError>>
    where
        T: Sync,
        G: Sync,
    {
        texts.par_iter().map(|text| self.annotate(text)).collect()
    }

    fn run_collaborators(&self, text: &str) -> Result<Vec<TaggedToken>, MarkupError> {
        let tokens = self.tokenizer.tokenize(text)?;
        let tagged = self.tagger.tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(MarkupError::LengthMismatch {
                tokens: tokens.len(),
                labels: tagged.len(),
            });
        }
        Ok(tagged)
    }
}

fn as_pairs(tagged: &[TaggedToken]) -> Vec<(&str, &str)> {
    tagged
        .iter()
        .map(|tt| (tt.token.text.as_str(), tt.label.as_str()))
        .collect()
}
