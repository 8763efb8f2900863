//! CitationGraph: owned adjacency structure for the assembled graph
//!
//! Nodes and both adjacency directions are kept in `BTreeMap`s keyed by
//! article id, so every iteration order is deterministic and already sorted —
//! the exporters lean on this instead of sorting again.

use super::article::ArticleId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node in the citation graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Article identifier
    pub id: ArticleId,
    /// Display title (`title` falling back to `original_title`), if any
    pub title: Option<String>,
}

impl GraphNode {
    /// Create a node for the given article
    pub fn new(id: ArticleId, title: Option<String>) -> Self {
        Self { id, title }
    }

    /// Display string for the node, falling back to its id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}

/// A directed, weighted citation graph
///
/// The node set is exactly the input article set; isolated articles remain as
/// nodes. Edges are keyed by ordered `(source, target)` pair and carry the
/// number of citation instances from `source` that resolved to `target`.
/// Both adjacency directions are materialized, so successor and predecessor
/// queries are O(degree) and degree queries O(1).
///
/// The graph is immutable once the builder returns it.
#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    nodes: BTreeMap<ArticleId, GraphNode>,
    outgoing: BTreeMap<ArticleId, BTreeMap<ArticleId, u64>>,
    incoming: BTreeMap<ArticleId, BTreeMap<ArticleId, u64>>,
    edge_count: usize,
}

impl CitationGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a node; a node with the same id is replaced.
    pub(crate) fn add_node(&mut self, node: GraphNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Materialize an edge with its fully accumulated weight.
    ///
    /// Self-loops and zero weights never reach this point; the builder drops
    /// self-references and only materializes positive accumulations.
    pub(crate) fn add_edge(&mut self, source: ArticleId, target: ArticleId, weight: u64) {
        debug_assert_ne!(source, target, "self-loops are never materialized");
        debug_assert!(weight >= 1, "materialized edges carry positive weight");
        self.incoming
            .entry(target.clone())
            .or_default()
            .insert(source.clone(), weight);
        let previous = self.outgoing.entry(source).or_default().insert(target, weight);
        if previous.is_none() {
            self.edge_count += 1;
        }
    }

    /// Get a node by id
    pub fn node(&self, id: &ArticleId) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// All nodes, ascending by id
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// All edges as `(source, target, weight)`, ascending by (source, target)
    pub fn edges(&self) -> impl Iterator<Item = (&ArticleId, &ArticleId, u64)> {
        self.outgoing.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |(target, &weight)| (source, target, weight))
        })
    }

    /// Weight of the edge `source -> target`, if materialized
    pub fn weight(&self, source: &ArticleId, target: &ArticleId) -> Option<u64> {
        self.outgoing.get(source)?.get(target).copied()
    }

    /// Ids cited by `id`, ascending
    pub fn successors(&self, id: &ArticleId) -> impl Iterator<Item = &ArticleId> {
        self.outgoing.get(id).into_iter().flat_map(|m| m.keys())
    }

    /// Ids citing `id`, ascending
    pub fn predecessors(&self, id: &ArticleId) -> impl Iterator<Item = &ArticleId> {
        self.incoming.get(id).into_iter().flat_map(|m| m.keys())
    }

    /// Number of distinct articles `id` cites
    pub fn out_degree(&self, id: &ArticleId) -> usize {
        self.outgoing.get(id).map_or(0, |m| m.len())
    }

    /// Number of distinct articles citing `id`
    pub fn in_degree(&self, id: &ArticleId) -> usize {
        self.incoming.get(id).map_or(0, |m| m.len())
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of materialized edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Induced subgraph over the nodes that participate in at least one edge.
    ///
    /// This is the renderer-facing view: isolated articles are dropped, every
    /// edge survives. The original graph is left untouched.
    pub fn connected_subgraph(&self) -> CitationGraph {
        let mut sub = CitationGraph::new();
        for (source, target, weight) in self.edges() {
            for id in [source, target] {
                if sub.node(id).is_none() {
                    if let Some(node) = self.nodes.get(id) {
                        sub.add_node(node.clone());
                    }
                }
            }
            sub.add_edge(source.clone(), target.clone(), weight);
        }
        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ArticleId {
        ArticleId::from(s)
    }

    fn sample_graph() -> CitationGraph {
        // A -> B (2), A -> C (1), C -> B (1); D isolated
        let mut graph = CitationGraph::new();
        for node in ["A", "B", "C", "D"] {
            graph.add_node(GraphNode::new(id(node), Some(format!("Title {node}"))));
        }
        graph.add_edge(id("A"), id("B"), 2);
        graph.add_edge(id("A"), id("C"), 1);
        graph.add_edge(id("C"), id("B"), 1);
        graph
    }

    #[test]
    fn counts_and_weights() {
        let graph = sample_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(&id("A"), &id("B")), Some(2));
        assert_eq!(graph.weight(&id("B"), &id("A")), None);
    }

    #[test]
    fn degrees() {
        let graph = sample_graph();
        assert_eq!(graph.out_degree(&id("A")), 2);
        assert_eq!(graph.in_degree(&id("A")), 0);
        assert_eq!(graph.in_degree(&id("B")), 2);
        assert_eq!(graph.out_degree(&id("D")), 0);
        assert_eq!(graph.in_degree(&id("D")), 0);
    }

    #[test]
    fn adjacency_is_sorted() {
        let graph = sample_graph();
        let succ: Vec<&str> = graph.successors(&id("A")).map(ArticleId::as_str).collect();
        assert_eq!(succ, ["B", "C"]);
        let pred: Vec<&str> = graph.predecessors(&id("B")).map(ArticleId::as_str).collect();
        assert_eq!(pred, ["A", "C"]);
    }

    #[test]
    fn edges_iterate_in_pair_order() {
        let graph = sample_graph();
        let pairs: Vec<(&str, &str, u64)> = graph
            .edges()
            .map(|(s, t, w)| (s.as_str(), t.as_str(), w))
            .collect();
        assert_eq!(pairs, [("A", "B", 2), ("A", "C", 1), ("C", "B", 1)]);
    }

    #[test]
    fn connected_subgraph_drops_isolated_nodes() {
        let graph = sample_graph();
        let sub = graph.connected_subgraph();

        assert_eq!(sub.node_count(), 3);
        assert!(sub.node(&id("D")).is_none());
        assert_eq!(sub.edge_count(), graph.edge_count());
        assert_eq!(sub.weight(&id("A"), &id("B")), Some(2));
        // Source graph unchanged
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn display_title_falls_back_to_id() {
        let node = GraphNode::new(id("PMC9"), None);
        assert_eq!(node.display_title(), "PMC9");
    }
}
