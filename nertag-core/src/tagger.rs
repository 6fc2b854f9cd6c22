//! # Tagger Seam and Demo Classifier
//!
//! The entity classifier is an external collaborator: given the token
//! sequence, it returns one raw label string per token, same order. This
//! module defines that seam ([`Tagger`]) and ships [`GazetteerTagger`], a
//! small rule-based implementation so the pipeline can run end to end
//! without a statistical model.
//!
//! `GazetteerTagger` deliberately emits Stanford-style uppercase labels
//! (`PERSON`, `ORGANIZATION`, `LOCATION`, `O`), exercising the formatter's
//! defensive case normalization.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MarkupError;
use crate::tokenizer::Token;

/// A token paired with the raw label the classifier assigned to it.
///
/// The label is kept as the classifier's raw string; normalization into the
/// closed category set happens in the formatter, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub label: String,
}

/// Assigns one label per token, preserving order and length.
pub trait Tagger {
    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>, MarkupError>;
}

const PERSON: &str = "PERSON";
const ORGANIZATION: &str = "ORGANIZATION";
const LOCATION: &str = "LOCATION";
const OUTSIDE: &str = "O";

/// Rule-based demo classifier: gazetteers plus positional patterns.
///
/// Rules, applied in order (first match wins per token):
/// 1. Person gazetteer (single tokens).
/// 2. Location gazetteer (n-grams, e.g. "New York").
/// 3. Organization gazetteer (n-grams, e.g. "JP Morgan").
/// 4. Honorific titles: "Mr. Smith" marks the capitalized name as person.
/// 5. Organization suffixes: "Acme Corp." marks both tokens as organization.
///
/// Every unmatched token gets the `O` sentinel.
pub struct GazetteerTagger {
    /// Known person names, lowercase, single tokens.
    persons: Vec<String>,
    /// Known locations, lowercase, possibly multi-word.
    locations: Vec<Vec<String>>,
    /// Known organizations, lowercase, possibly multi-word.
    organizations: Vec<Vec<String>>,
    /// Honorifics and titles that precede a person name.
    title: Regex,
    /// A capitalized word ("Smith", "Paris").
    capitalized: Regex,
    /// Corporate suffixes that mark the preceding word as an organization.
    org_suffixes: Vec<String>,
}

impl GazetteerTagger {
    /// Creates a tagger with empty gazetteers. Patterns (titles, corporate
    /// suffixes) are built in; entity lists come from the `add_*` methods.
    pub fn new() -> Self {
        Self {
            persons: vec![],
            locations: vec![],
            organizations: vec![],
            title: Regex::new(r"^(Mr|Mrs|Ms|Dr|Prof|Rev|Gen|Sen|Gov|President|Senator|Governor)\.?$")
                .expect("title pattern is valid"),
            capitalized: Regex::new(r"^[A-Z][a-z]+$").expect("capitalized pattern is valid"),
            org_suffixes: ["inc", "corp", "ltd", "co", "llc", "plc", "gmbh"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Creates a tagger preloaded with a small demonstration lexicon.
    pub fn with_demo_lexicon() -> Self {
        let mut tagger = Self::new();
        for name in ["Tim", "Jim", "Mary", "Alice", "Barack", "Obama", "Angela", "Merkel"] {
            tagger.add_person(name);
        }
        for place in [
            "New York",
            "London",
            "Paris",
            "Germany",
            "Brazil",
            "California",
            "San Francisco",
            "United States",
        ] {
            tagger.add_location(place);
        }
        for org in [
            "JP Morgan",
            "Goldman Sachs",
            "Acme",
            "Google",
            "Microsoft",
            "Stanford University",
            "United Nations",
        ] {
            tagger.add_organization(org);
        }
        tagger
    }

    pub fn add_person(&mut self, name: &str) {
        self.persons.push(name.to_lowercase());
    }

    pub fn add_location(&mut self, name: &str) {
        let parts: Vec<String> = name.split_whitespace().map(|p| p.to_lowercase()).collect();
        if !parts.is_empty() {
            self.locations.push(parts);
        }
    }

    pub fn add_organization(&mut self, name: &str) {
        let parts: Vec<String> = name.split_whitespace().map(|p| p.to_lowercase()).collect();
        if !parts.is_empty() {
            self.organizations.push(parts);
        }
    }

    /// Marks every unclaimed n-gram gazetteer match with `label`.
    fn mark_ngrams(
        &self,
        tokens: &[Token],
        entries: &[Vec<String>],
        label: &'static str,
        labels: &mut [Option<&'static str>],
    ) {
        'outer: for i in 0..tokens.len() {
            if labels[i].is_some() {
                continue;
            }
            for entry in entries {
                let end = i + entry.len();
                if end <= tokens.len()
                    && labels[i..end].iter().all(Option::is_none)
                    && entry
                        .iter()
                        .enumerate()
                        .all(|(j, part)| tokens[i + j].text.to_lowercase() == *part)
                {
                    for slot in &mut labels[i..end] {
                        *slot = Some(label);
                    }
                    continue 'outer;
                }
            }
        }
    }
}

impl Default for GazetteerTagger {
    fn default() -> Self {
        Self::with_demo_lexicon()
    }
}

impl Tagger for GazetteerTagger {
    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>, MarkupError> {
        let mut labels: Vec<Option<&'static str>> = vec![None; tokens.len()];

        // 1. Person gazetteer (single tokens)
        for (i, token) in tokens.iter().enumerate() {
            if self.persons.contains(&token.text.to_lowercase()) {
                labels[i] = Some(PERSON);
            }
        }

        // 2+3. Location and organization gazetteers (n-grams)
        self.mark_ngrams(tokens, &self.locations, LOCATION, &mut labels);
        self.mark_ngrams(tokens, &self.organizations, ORGANIZATION, &mut labels);

        // 4. Title pattern: "Mr. Smith" -> "Smith" is a person. Extends over
        // following capitalized tokens so "Mr. John Smith" is covered.
        for i in 0..tokens.len().saturating_sub(1) {
            if !self.title.is_match(&tokens[i].text) {
                continue;
            }
            let mut j = i + 1;
            while j < tokens.len()
                && j <= i + 3
                && labels[j].is_none()
                && self.capitalized.is_match(&tokens[j].text)
            {
                labels[j] = Some(PERSON);
                j += 1;
            }
        }

        // 5. Organization suffix: "Acme Corp." -> both tokens are ORG
        for i in 1..tokens.len() {
            let stripped = tokens[i].text.trim_end_matches('.').to_lowercase();
            if self.org_suffixes.contains(&stripped)
                && labels[i].is_none()
                && labels[i - 1].is_none()
                && self.capitalized.is_match(&tokens[i - 1].text)
            {
                labels[i - 1] = Some(ORGANIZATION);
                labels[i] = Some(ORGANIZATION);
            }
        }

        Ok(tokens
            .iter()
            .zip(labels)
            .map(|(token, label)| TaggedToken {
                token: token.clone(),
                label: label.unwrap_or(OUTSIDE).to_string(),
            })
            .collect())
    }
}
