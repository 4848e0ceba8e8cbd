use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use cutset::{Edge, Graph};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutset")]
#[command(about = "Connectivity queries over an undirected graph read as an edge list", long_about = None)]
struct Cli {
    /// Which structural query to answer
    #[arg(long, value_enum, default_value_t = Query::WideBridges)]
    query: Query,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Read the graph from this file instead of stdin
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Query {
    WideBridges,
    ArticulationPoints,
    WideBridgesViaArticulation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    #[cfg(feature = "tracing")]
    init_tracing();

    let cli = Cli::parse();

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read graph from stdin")?;
            buf
        }
    };

    let graph = parse_graph(&text)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(vertices = graph.size(), edges = graph.edge_count(), "graph loaded");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.query {
        Query::WideBridges => write_edges(&mut out, &graph.wide_bridges(), cli.format)?,
        Query::WideBridgesViaArticulation => write_edges(
            &mut out,
            &graph.wide_bridges_from_articulation_points(),
            cli.format,
        )?,
        Query::ArticulationPoints => write_vertices(&mut out, &graph.articulation_points(), cli.format)?,
    }
    out.flush().context("Failed to flush output")?;

    Ok(())
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parses a vertex count followed by whitespace-separated `u v` pairs.
fn parse_graph(text: &str) -> Result<Graph> {
    let mut tokens = text.split_whitespace();

    let Some(count) = tokens.next() else {
        bail!("Input is empty; expected a vertex count");
    };
    let count: i64 = count
        .parse()
        .with_context(|| format!("Invalid vertex count {count:?}"))?;
    let mut graph = Graph::with_vertex_count(count)?;

    while let Some(u) = tokens.next() {
        let Some(v) = tokens.next() else {
            bail!("Edge starting at {u:?} is missing its second endpoint");
        };
        let u = parse_vertex(&graph, u)?;
        let v = parse_vertex(&graph, v)?;
        graph.add_edge(u, v)?;
    }

    Ok(graph)
}

fn parse_vertex(graph: &Graph, token: &str) -> Result<usize> {
    let raw: i64 = token
        .parse()
        .with_context(|| format!("Invalid vertex id {token:?}"))?;
    Ok(graph.checked_vertex(raw)?)
}

fn write_edges(out: &mut impl Write, edges: &BTreeSet<Edge>, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for edge in edges {
                writeln!(out, "{edge}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, edges)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_vertices(out: &mut impl Write, vertices: &BTreeSet<usize>, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for v in vertices {
                writeln!(out, "{v}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, vertices)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutset::{ErrorKind, GraphError};

    #[test]
    fn parses_count_and_pairs() {
        let graph = parse_graph("4\n0 1\n1 2\n2 3\n3 0\n0 2\n").unwrap();
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.neighbors(0).unwrap(), &[1, 3, 2]);
    }

    #[test]
    fn count_only_gives_edgeless_graph() {
        let graph = parse_graph("3").unwrap();
        assert_eq!(graph.size(), 3);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_graph("  \n").is_err());
    }

    #[test]
    fn rejects_dangling_endpoint() {
        let err = parse_graph("3 0 1 2").unwrap_err();
        assert!(err.to_string().contains("missing its second endpoint"));
    }

    #[test]
    fn rejects_negative_count() {
        let err = parse_graph("-2").unwrap_err();
        let graph_err = err.downcast_ref::<GraphError>().unwrap();
        assert_eq!(graph_err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn rejects_negative_vertex() {
        let err = parse_graph("3 0 -1").unwrap_err();
        let graph_err = err.downcast_ref::<GraphError>().unwrap();
        assert_eq!(graph_err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn rejects_self_loop() {
        let err = parse_graph("3 1 1").unwrap_err();
        assert_eq!(
            err.downcast_ref::<GraphError>(),
            Some(&GraphError::SelfLoop { vertex: 1 })
        );
    }

    #[test]
    fn text_output_is_one_pair_per_line() {
        let graph = parse_graph("6 0 1 0 5 1 2 1 3 2 3 4 3 4 2").unwrap();
        let mut out = Vec::new();
        write_edges(&mut out, &graph.wide_bridges(), Format::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 1\n1 2\n1 3\n2 3\n");
    }

    #[test]
    fn json_output_lists_vertices() {
        let graph = parse_graph("4 0 1 1 2 2 3").unwrap();
        let mut out = Vec::new();
        write_vertices(&mut out, &graph.articulation_points(), Format::Json).unwrap();
        let parsed: Vec<usize> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![1, 2]);
    }
}
