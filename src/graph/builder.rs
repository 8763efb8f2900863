//! Graph assembly: resolve citations through the title index and accumulate
//! edge weights

use super::article::{Article, ArticleId};
use super::citation::{CitationGraph, GraphNode};
use super::index::TitleIndex;
use super::normalize::normalize_title;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur while assembling the graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// An article without an id cannot be indexed or referenced, so the
    /// whole build is rejected.
    #[error("article at index {index} is missing its pmcid")]
    MissingArticleId { index: usize },
}

/// Result type for graph assembly
pub type GraphResult<T> = Result<T, GraphError>;

/// Tally of citation titles that matched no article, keyed by normalized title
pub type UnmatchedTitles = BTreeMap<String, u64>;

/// The finished graph together with its unmatched-citation tally
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub graph: CitationGraph,
    pub unmatched: UnmatchedTitles,
}

/// Build the citation graph from a snapshot of the article collection.
///
/// Every article becomes a node. Each citation is resolved through the title
/// index; when several articles share the cited title, every candidate other
/// than the citing article receives a full weight-1 increment (fan-out).
/// Citations whose title normalizes to the empty string are skipped outright;
/// citations that resolve only to the citing article itself are dropped
/// without being counted as unmatched.
pub fn build_graph(articles: &[Article]) -> GraphResult<BuildOutput> {
    let index = TitleIndex::build(articles);
    tracing::debug!(
        articles = articles.len(),
        keys = index.key_count(),
        "title index built"
    );

    let mut graph = CitationGraph::new();
    let mut unmatched = UnmatchedTitles::new();
    let mut edge_weights: BTreeMap<(ArticleId, ArticleId), u64> = BTreeMap::new();

    for (i, article) in articles.iter().enumerate() {
        let pmcid = article
            .pmcid
            .as_deref()
            .ok_or(GraphError::MissingArticleId { index: i })?;
        let id = ArticleId::from_string(pmcid);
        graph.add_node(GraphNode::new(
            id.clone(),
            article.display_title().map(str::to_owned),
        ));

        for citation in &article.citations {
            let key = normalize_title(citation.title.as_deref());
            if key.is_empty() {
                continue;
            }
            let targets = match index.lookup(&key) {
                Some(targets) => targets,
                None => {
                    *unmatched.entry(key).or_insert(0) += 1;
                    continue;
                }
            };
            for target in targets {
                if *target == id {
                    // Self-reference within the dataset: dropped, and
                    // distinct from "no match".
                    continue;
                }
                *edge_weights.entry((id.clone(), target.clone())).or_insert(0) += 1;
            }
        }
    }

    for ((source, target), weight) in edge_weights {
        graph.add_edge(source, target, weight);
    }

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        unmatched = unmatched.len(),
        "citation graph assembled"
    );
    Ok(BuildOutput { graph, unmatched })
}
