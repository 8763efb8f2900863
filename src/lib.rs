//! Citegraph: citation graph engine for article collections
//!
//! Ingests article records (identifier, titles, declared citations), matches
//! citation titles against article titles on a normalized key, and assembles
//! a directed, weighted citation graph with deterministic exports.
//!
//! # Core Concepts
//!
//! - **Normalized keys**: lower-cased, punctuation-stripped title strings
//!   used purely for matching, never as identity
//! - **Fan-out**: a citation to a title shared by several articles credits
//!   every candidate (except the citing article) with a full edge increment
//! - **Determinism**: the graph iterates in sorted order, so the JSON,
//!   SQLite, and GraphML exports are byte-stable across runs
//!
//! # Example
//!
//! ```
//! use citegraph::{build_graph, Article};
//!
//! let articles = vec![
//!     Article::new("PMC1").with_title("Alpha Study").with_citation("Beta Study"),
//!     Article::new("PMC2").with_title("Beta Study"),
//! ];
//! let output = build_graph(&articles).unwrap();
//! assert_eq!(output.graph.edge_count(), 1);
//! ```

pub mod export;
mod graph;
pub mod report;

pub use export::{
    node_records, to_graphml_string, to_json_string, write_graphml, write_json, write_sqlite,
    ExportError, ExportResult, NodeRecord,
};
pub use graph::{
    build_graph, normalize_title, Article, ArticleId, BuildOutput, CitationGraph, CitationRef,
    GraphError, GraphNode, GraphResult, TitleIndex, UnmatchedTitles,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
