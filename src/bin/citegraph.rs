//! Citegraph CLI — build a citation graph from an articles JSON file.
//!
//! Usage:
//!   citegraph [INPUT] [--json path] [--sqlite path] [--graphml path]

use citegraph::{build_graph, report, write_graphml, write_json, write_sqlite, Article};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "citegraph",
    version,
    about = "Build a weighted citation graph from an article collection"
)]
struct Cli {
    /// Path to the articles JSON file
    #[arg(default_value = "articles.json")]
    input: PathBuf,

    /// Path for the JSON adjacency export (default: <input>.graph.json)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Path for the SQLite export (default: <input>.db)
    #[arg(long)]
    sqlite: Option<PathBuf>,

    /// Optional path for a GraphML export
    #[arg(long)]
    graphml: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_articles(path: &Path) -> Result<Vec<Article>, String> {
    let file =
        File::open(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("cannot parse '{}': {}", path.display(), e))
}

fn run(cli: Cli) -> i32 {
    let articles = match load_articles(&cli.input) {
        Ok(articles) => articles,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let output = match build_graph(&articles) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if output.graph.edge_count() == 0 {
        // Terminal no-op, not a failure: nothing to export.
        println!("No mutual matches were found - unable to generate a citation graph");
        return 0;
    }

    println!(
        "Built citation graph with {} nodes and {} edges.",
        output.graph.node_count(),
        output.graph.edge_count()
    );

    let json_path = cli
        .json
        .unwrap_or_else(|| cli.input.with_extension("graph.json"));
    if let Err(e) = write_json(&output.graph, &json_path) {
        eprintln!("Error: JSON export failed: {}", e);
        return 1;
    }
    println!("JSON export written to {}.", json_path.display());

    let sqlite_path = cli.sqlite.unwrap_or_else(|| cli.input.with_extension("db"));
    if let Err(e) = write_sqlite(&output.graph, &sqlite_path) {
        eprintln!("Error: SQLite export failed: {}", e);
        return 1;
    }
    println!("SQLite export written to {}.", sqlite_path.display());

    if let Some(graphml_path) = cli.graphml {
        if let Err(e) = write_graphml(&output.graph, &graphml_path) {
            eprintln!("Error: GraphML export failed: {}", e);
            return 1;
        }
        println!("GraphML export written to {}.", graphml_path.display());
    }

    if let Some(summary) = report::unmatched_summary(&output.unmatched) {
        println!("{}", summary);
    }
    0
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();
    std::process::exit(run(cli));
}
