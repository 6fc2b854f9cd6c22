//! # Error Types
//!
//! All fallible operations in this crate return [`MarkupError`]. Formatting is
//! all-or-nothing: a malformed upstream result (empty sequence, token/label
//! count mismatch) aborts the call instead of producing partial markup.

use thiserror::Error;

/// Errors produced by the markup pipeline and its collaborators.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The tagged-token sequence was empty. The formatter requires at least
    /// one (token, label) pair.
    #[error("empty tagged-token sequence: nothing to format")]
    EmptyInput,

    /// The tagger returned a different number of labels than there were
    /// tokens. This breaks the upstream contract and is never recovered.
    #[error("tagger output mismatch: {tokens} tokens but {labels} labels")]
    LengthMismatch { tokens: usize, labels: usize },

    /// The tokenizer collaborator failed.
    #[error("tokenizer failed: {0}")]
    Tokenizer(String),

    /// The tagger collaborator failed.
    #[error("tagger failed: {0}")]
    Tagger(String),
}
