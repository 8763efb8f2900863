//! Title index: normalized title -> article ids

use super::article::{Article, ArticleId};
use super::normalize::normalize_title;
use std::collections::{HashMap, HashSet};

/// Index from normalized title to the ids of articles carrying that title
///
/// An article registers under the normalized key of its `title` and of its
/// `original_title` independently, so it may appear under zero, one, or two
/// distinct keys. Multiple ids legitimately share a key when distinct
/// articles normalize to the same title text.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    entries: HashMap<String, HashSet<ArticleId>>,
}

impl TitleIndex {
    /// Build the index from the full article collection.
    ///
    /// Titles that normalize to the empty string are excluded. Articles
    /// without an id are skipped here; the graph builder rejects them before
    /// the index is ever consulted.
    pub fn build(articles: &[Article]) -> Self {
        let mut entries: HashMap<String, HashSet<ArticleId>> = HashMap::new();
        for article in articles {
            let pmcid = match article.pmcid.as_deref() {
                Some(id) => id,
                None => continue,
            };
            for raw in [article.original_title.as_deref(), article.title.as_deref()] {
                let key = normalize_title(raw);
                if key.is_empty() {
                    continue;
                }
                entries
                    .entry(key)
                    .or_default()
                    .insert(ArticleId::from_string(pmcid));
            }
        }
        Self { entries }
    }

    /// Look up the article ids registered under a normalized key.
    ///
    /// Unknown keys and the empty key resolve to no articles.
    pub fn lookup(&self, key: &str) -> Option<&HashSet<ArticleId>> {
        if key.is_empty() {
            return None;
        }
        self.entries.get(key)
    }

    /// Number of distinct normalized keys
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
