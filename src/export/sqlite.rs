//! SQLite relational export
//!
//! Writes the finished graph into a `nodes`/`edges` schema with lookup
//! indices on both edge endpoints, so external consumers get efficient
//! successor and predecessor queries. An existing database file at the target
//! path is replaced wholesale, never appended to.

use super::ExportResult;
use crate::graph::CitationGraph;
use rusqlite::{params, Connection};
use std::path::Path;

/// Write the graph to a SQLite database at `path`.
///
/// One row per node, one row per materialized edge (weights are already
/// aggregated). Re-running against an existing file recreates it.
pub fn write_sqlite(graph: &CitationGraph, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    if path.exists() {
        std::fs::remove_file(path)?;
    }

    let mut conn = Connection::open(path)?;
    conn.execute_batch(
        r#"
        CREATE TABLE nodes (
            id TEXT PRIMARY KEY,
            pmcid TEXT,
            title TEXT
        );

        CREATE TABLE edges (
            source TEXT NOT NULL,
            target TEXT NOT NULL,
            weight INTEGER NOT NULL,
            FOREIGN KEY(source) REFERENCES nodes(id),
            FOREIGN KEY(target) REFERENCES nodes(id)
        );
        "#,
    )?;

    let tx = conn.transaction()?;
    {
        let mut insert_node = tx.prepare("INSERT INTO nodes (id, pmcid, title) VALUES (?1, ?2, ?3)")?;
        for node in graph.nodes() {
            insert_node.execute(params![node.id.as_str(), node.id.as_str(), node.title])?;
        }

        let mut insert_edge =
            tx.prepare("INSERT INTO edges (source, target, weight) VALUES (?1, ?2, ?3)")?;
        for (source, target, weight) in graph.edges() {
            insert_edge.execute(params![source.as_str(), target.as_str(), weight as i64])?;
        }
    }
    tx.execute_batch(
        r#"
        CREATE INDEX idx_edges_source ON edges(source);
        CREATE INDEX idx_edges_target ON edges(target);
        "#,
    )?;
    tx.commit()?;

    tracing::debug!(path = %path.display(), "SQLite export written");
    Ok(())
}
