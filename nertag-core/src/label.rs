//! # Entity Labels
//!
//! Defines the closed set of entity categories the formatter knows how to
//! mark up, plus the normalization from raw classifier label strings.
//!
//! ## Categories
//!
//! | Label        | Markup tag                    | Examples                 |
//! |--------------|-------------------------------|--------------------------|
//! | Person       | `<Person>...</Person>`        | Tim, Angela Merkel       |
//! | Organization | `<Organization>...</Organization>` | JP Morgan, Acme Corp |
//! | Location     | `<Location>...</Location>`    | New York, Germany        |
//! | Other        | (none — plain text)           | `O` sentinel, `MISC`, …  |
//!
//! Classifiers disagree on label casing (`PERSON`, `Person`, `person`), so
//! raw strings are normalized **once** at ingestion via [`EntityLabel::from_raw`].
//! Everything downstream compares enum variants, never strings.

use serde::{Deserialize, Serialize};

/// Canonical entity category attached to a token or span.
///
/// Any raw label outside the three recognized categories — including the
/// classifier's "no entity" sentinel (`O`) and extra categories such as
/// `MISC` or `DATE` — maps to [`EntityLabel::Other`] and is rendered as
/// plain, unmarked text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    /// Names of people, real or fictional.
    Person,
    /// Companies, institutions, public bodies, teams.
    Organization,
    /// Countries, cities, states, geographic features.
    Location,
    /// Not a recognized entity category. Never marked up.
    Other,
}

impl EntityLabel {
    /// Normalizes a raw classifier label into the canonical category.
    ///
    /// Comparison is case-insensitive, so `"PERSON"`, `"Person"` and
    /// `"person"` all map to [`EntityLabel::Person`]. Unknown values are not
    /// an error — they fold into [`EntityLabel::Other`].
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("person") {
            EntityLabel::Person
        } else if raw.eq_ignore_ascii_case("organization") {
            EntityLabel::Organization
        } else if raw.eq_ignore_ascii_case("location") {
            EntityLabel::Location
        } else {
            EntityLabel::Other
        }
    }

    /// Markup tag name for this category, or `None` for [`EntityLabel::Other`].
    pub fn tag_name(&self) -> Option<&'static str> {
        match self {
            EntityLabel::Person => Some("Person"),
            EntityLabel::Organization => Some("Organization"),
            EntityLabel::Location => Some("Location"),
            EntityLabel::Other => None,
        }
    }

    /// Whether this label is one of the three recognized entity categories.
    pub fn is_entity(&self) -> bool {
        !matches!(self, EntityLabel::Other)
    }

    /// CSS color used to highlight this category in the web UI.
    pub fn color(&self) -> &'static str {
        match self {
            EntityLabel::Person => "#3b82f6",       // blue
            EntityLabel::Organization => "#10b981", // emerald
            EntityLabel::Location => "#f59e0b",     // amber
            EntityLabel::Other => "#9ca3af",        // gray
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag_name().unwrap_or("O"))
    }
}
