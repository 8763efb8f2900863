//! Core graph data structures and assembly

mod article;
mod builder;
mod citation;
mod index;
mod normalize;

pub use article::{Article, ArticleId, CitationRef};
pub use builder::{build_graph, BuildOutput, GraphError, GraphResult, UnmatchedTitles};
pub use citation::{CitationGraph, GraphNode};
pub use index::TitleIndex;
pub use normalize::normalize_title;
