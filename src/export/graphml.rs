//! GraphML export
//!
//! Emits the graph in GraphML with `title` as a node attribute and `weight`
//! as an edge attribute. Nodes and edges are written in ascending id / pair
//! order, so the output is stable across runs and diffable like the JSON
//! export.

use super::ExportResult;
use crate::graph::CitationGraph;
use std::fmt::Write as _;
use std::path::Path;

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

/// Escape a string for use in XML attribute values and text content.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the graph as a GraphML document.
pub fn to_graphml_string(graph: &CitationGraph) -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(doc, "<graphml xmlns=\"{}\">", GRAPHML_NS);
    doc.push_str("  <key id=\"d0\" for=\"node\" attr.name=\"title\" attr.type=\"string\"/>\n");
    doc.push_str("  <key id=\"d1\" for=\"edge\" attr.name=\"weight\" attr.type=\"long\"/>\n");
    doc.push_str("  <graph edgedefault=\"directed\">\n");

    for node in graph.nodes() {
        match &node.title {
            Some(title) => {
                let _ = writeln!(
                    doc,
                    "    <node id=\"{}\"><data key=\"d0\">{}</data></node>",
                    escape(node.id.as_str()),
                    escape(title)
                );
            }
            None => {
                let _ = writeln!(doc, "    <node id=\"{}\"/>", escape(node.id.as_str()));
            }
        }
    }

    for (source, target, weight) in graph.edges() {
        let _ = writeln!(
            doc,
            "    <edge source=\"{}\" target=\"{}\"><data key=\"d1\">{}</data></edge>",
            escape(source.as_str()),
            escape(target.as_str()),
            weight
        );
    }

    doc.push_str("  </graph>\n");
    doc.push_str("</graphml>\n");
    doc
}

/// Write the GraphML export to `path`, replacing any existing file.
pub fn write_graphml(graph: &CitationGraph, path: impl AsRef<Path>) -> ExportResult<()> {
    std::fs::write(path.as_ref(), to_graphml_string(graph))?;
    tracing::debug!(path = %path.as_ref().display(), "GraphML export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, Article};

    #[test]
    fn emits_nodes_edges_and_weights() {
        let articles = vec![
            Article::new("A1")
                .with_title("Alpha Study")
                .with_citation("Beta Study")
                .with_citation("Beta Study"),
            Article::new("A2").with_title("Beta Study"),
        ];
        let graph = build_graph(&articles).unwrap().graph;
        let doc = to_graphml_string(&graph);

        assert!(doc.contains("<node id=\"A1\"><data key=\"d0\">Alpha Study</data></node>"));
        assert!(doc.contains("<edge source=\"A1\" target=\"A2\"><data key=\"d1\">2</data></edge>"));
    }

    #[test]
    fn escapes_markup_in_titles() {
        let articles = vec![Article::new("A1").with_title("Effects of <X> & \"Y\"")];
        let graph = build_graph(&articles).unwrap().graph;
        let doc = to_graphml_string(&graph);

        assert!(doc.contains("Effects of &lt;X&gt; &amp; &quot;Y&quot;"));
        assert!(!doc.contains("<X>"));
    }

    #[test]
    fn output_is_stable_across_runs() {
        let articles = vec![
            Article::new("A2").with_title("Beta Study"),
            Article::new("A1")
                .with_title("Alpha Study")
                .with_citation("Beta Study"),
        ];
        let graph = build_graph(&articles).unwrap().graph;
        assert_eq!(to_graphml_string(&graph), to_graphml_string(&graph));
        // Nodes appear in id order regardless of input order.
        let a1 = to_graphml_string(&graph).find("id=\"A1\"").unwrap();
        let a2 = to_graphml_string(&graph).find("id=\"A2\"").unwrap();
        assert!(a1 < a2);
    }
}
