//! Article input model and identifiers

use serde::{Deserialize, Serialize};

/// Unique identifier for an article (the PMCID in the source dataset)
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Create an ArticleId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ArticleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A citation as declared by a citing article
///
/// Carries no identity of its own beyond its raw title text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationRef {
    /// Raw title text, if the source recorded one
    #[serde(default)]
    pub title: Option<String>,
}

impl CitationRef {
    /// Create a citation reference with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// An article record as produced by the external loader
///
/// `pmcid` is the stable key used everywhere; a record without one cannot be
/// indexed or referenced and is rejected when the graph is built. The title
/// fields are alternate display/matching strings and may each be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    /// Stable identifier
    #[serde(default)]
    pub pmcid: Option<String>,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Title as originally published (e.g., before translation)
    #[serde(default)]
    pub original_title: Option<String>,
    /// Citations declared by this article, in document order
    #[serde(default)]
    pub citations: Vec<CitationRef>,
}

impl Article {
    /// Create an article with the given identifier
    pub fn new(pmcid: impl Into<String>) -> Self {
        Self {
            pmcid: Some(pmcid.into()),
            ..Default::default()
        }
    }

    /// Set the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the original (pre-translation) title
    pub fn with_original_title(mut self, title: impl Into<String>) -> Self {
        self.original_title = Some(title.into());
        self
    }

    /// Append a citation with the given title
    pub fn with_citation(mut self, title: impl Into<String>) -> Self {
        self.citations.push(CitationRef::new(title));
        self
    }

    /// Preferred display string: `title`, falling back to `original_title`.
    ///
    /// Empty strings count as absent, so a blank `title` falls through to
    /// `original_title` rather than masking it.
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.original_title.as_deref().filter(|t| !t.is_empty()))
    }
}
