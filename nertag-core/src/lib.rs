//! # nertag-core — Entity Markup Post-Processing
//!
//! This crate turns the output of a named-entity classifier into
//! human-readable, tag-annotated text. Recognized entities are wrapped in
//! inline markup (`<Person>...</Person>`, `<Organization>...</Organization>`,
//! `<Location>...</Location>`); everything else passes through unmarked.
//!
//! ## Architecture
//!
//! A linear pipeline where data flows and is transformed step by step:
//!
//! 1. **Input**: raw text (`String`).
//! 2. **Tokenization** ([`tokenizer`]): the text is split into tokens,
//!    preserving original byte offsets. A collaborator behind the
//!    [`Tokenizer`] trait; [`StandardTokenizer`] is the bundled default.
//! 3. **Tagging** ([`tagger`]): each token receives a raw label string from
//!    the classifier — a collaborator behind the [`Tagger`] trait. The
//!    bundled [`GazetteerTagger`] stands in for an external model.
//! 4. **Span merging and rendering** ([`span`]): adjacent tokens sharing a
//!    normalized label ([`label`]) merge into spans, and each span renders
//!    either wrapped in its tag or as plain text.
//!
//! The span formatter is the core: a pure, deterministic, single-pass
//! transformation with no I/O and no shared state, safe to call from any
//! number of threads at once.
//!
//! ## Example
//!
//! ```rust
//! use nertag_core::NerAnnotator;
//!
//! let annotator = NerAnnotator::new();
//! let out = annotator
//!     .annotate("Tim went to JP Morgan office in New York.")
//!     .unwrap();
//! assert_eq!(
//!     out,
//!     "<Person>Tim</Person> went to <Organization>JP Morgan</Organization> \
//!      office in <Location>New York</Location> ."
//! );
//! ```
//!
//! Classifier output that arrives pre-tokenized skips the collaborators
//! entirely:
//!
//! ```rust
//! use nertag_core::span::format_tagged;
//!
//! let tagged = [("Acme", "ORGANIZATION")];
//! assert_eq!(format_tagged(&tagged).unwrap(), "<Organization>Acme</Organization>");
//! ```

pub mod error;
pub mod label;
pub mod pipeline;
pub mod span;
pub mod tagger;
pub mod tokenizer;

pub use error::MarkupError;
pub use label::EntityLabel;
pub use pipeline::{Annotation, NerAnnotator};
pub use span::{format_aligned, format_tagged, merge_spans, render_spans, Span};
pub use tagger::{GazetteerTagger, TaggedToken, Tagger};
pub use tokenizer::{StandardTokenizer, Token, Tokenizer};
