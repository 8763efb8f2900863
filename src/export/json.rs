//! JSON document export: one adjacency record per node

use super::ExportResult;
use crate::graph::{ArticleId, CitationGraph};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One node's adjacency in the exported document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: ArticleId,
    pub title: Option<String>,
    /// Articles this node cites, ascending by id
    pub cited: Vec<ArticleId>,
    /// Articles citing this node, ascending by id
    pub cited_by: Vec<ArticleId>,
}

/// Collect per-node adjacency records, ascending by node id.
///
/// Isolated nodes appear with empty `cited`/`cited_by` sequences.
pub fn node_records(graph: &CitationGraph) -> Vec<NodeRecord> {
    graph
        .nodes()
        .map(|node| NodeRecord {
            id: node.id.clone(),
            title: node.title.clone(),
            cited: graph.successors(&node.id).cloned().collect(),
            cited_by: graph.predecessors(&node.id).cloned().collect(),
        })
        .collect()
}

/// Render the document export as a pretty-printed JSON string.
pub fn to_json_string(graph: &CitationGraph) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(&node_records(graph))?)
}

/// Write the document export to `path`, replacing any existing file.
pub fn write_json(graph: &CitationGraph, path: impl AsRef<Path>) -> ExportResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &node_records(graph))?;
    writer.flush()?;
    tracing::debug!(path = %path.as_ref().display(), "JSON export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, Article};

    fn sample_output() -> CitationGraph {
        let articles = vec![
            Article::new("A3").with_title("Gamma Study").with_citation("Beta Study"),
            Article::new("A1")
                .with_title("Alpha Study")
                .with_citation("Beta Study")
                .with_citation("Gamma Study"),
            Article::new("A2").with_title("Beta Study"),
        ];
        build_graph(&articles).unwrap().graph
    }

    #[test]
    fn records_are_sorted_by_id() {
        let records = node_records(&sample_output());
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["A1", "A2", "A3"]);
    }

    #[test]
    fn adjacency_lists_are_sorted() {
        let records = node_records(&sample_output());
        let a2 = records.iter().find(|r| r.id.as_str() == "A2").unwrap();
        let cited_by: Vec<&str> = a2.cited_by.iter().map(ArticleId::as_str).collect();
        assert_eq!(cited_by, ["A1", "A3"]);
        assert!(a2.cited.is_empty());
    }

    #[test]
    fn export_is_byte_identical_across_runs() {
        let graph = sample_output();
        let first = to_json_string(&graph).unwrap();
        let second = to_json_string(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn isolated_node_exports_empty_lists() {
        let articles = vec![Article::new("A1").with_title("Alpha Study")];
        let graph = build_graph(&articles).unwrap().graph;
        let records = node_records(&graph);

        assert_eq!(records.len(), 1);
        assert!(records[0].cited.is_empty());
        assert!(records[0].cited_by.is_empty());
    }

    #[test]
    fn titleless_node_exports_null_title() {
        let articles = vec![Article::new("A1")];
        let graph = build_graph(&articles).unwrap().graph;
        let json = to_json_string(&graph).unwrap();
        assert!(json.contains("\"title\": null"));
    }

    #[test]
    fn write_json_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        std::fs::write(&path, "stale contents").unwrap();

        let graph = sample_output();
        write_json(&graph, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json_string(&graph).unwrap());
    }
}
