//! Random graph component analysis driver.
//!
//! Builds a graph of `<size>` vertices, assigns `<size>` random undirected
//! edges, and reports the component structure together with the mean
//! analysis time over a number of repeated runs:
//!
//! ```text
//! random_components <size> [dense|sparse] [repetitions] [--json]
//! ```
//!
//! Small graphs (n ≤ 32) additionally print the edge listing and the member
//! list of every component. `--json` emits the summary as JSON instead of
//! the plain-text report. Set `RUST_LOG` to see progress logging.

use std::env;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use spoke::{connected_components, edges, new_graph, ComponentSet, Edge, Graph, GraphKind};

/// Vertex counts up to this many get their edges and members printed.
const VERBOSE_LIMIT: usize = 32;

#[derive(Serialize)]
struct Report {
    kind: GraphKind,
    vertices: usize,
    edges: usize,
    components: usize,
    largest: usize,
    sizes: Vec<usize>,
    mean_analysis_ns: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    edge_list: Option<Vec<Edge>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut json = false;
    let mut positional = Vec::new();
    for arg in &args {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg.as_str());
        }
    }

    let Some(size_arg) = positional.first() else {
        bail!("usage: random_components <size> [dense|sparse] [repetitions] [--json]");
    };
    let size: i64 = size_arg
        .parse()
        .with_context(|| format!("size {size_arg:?} is not an integer"))?;
    let kind = match positional.get(1).copied() {
        None | Some("dense") => GraphKind::Dense,
        Some("sparse") => GraphKind::Sparse,
        Some(other) => bail!("unknown graph kind {other:?}, expected \"dense\" or \"sparse\""),
    };
    let repetitions: u32 = match positional.get(2) {
        Some(reps) => reps
            .parse()
            .with_context(|| format!("repetitions {reps:?} is not a positive integer"))?,
        None => 100,
    };
    if repetitions == 0 {
        bail!("repetitions must be at least 1");
    }

    let mut graph = new_graph(kind, size)?;
    let vertices = graph.vertex_count();

    // One random undirected edge per vertex.
    let mut rng = rand::thread_rng();
    for _ in 0..vertices {
        let v = rng.gen_range(0..vertices);
        let w = rng.gen_range(0..vertices);
        graph.add_bi(v, w)?;
    }
    info!(vertices, edges = graph.edge_count(), ?kind, "graph built");

    let mut total = Duration::ZERO;
    let mut components: Option<ComponentSet> = None;
    for _ in 0..repetitions {
        let t0 = Instant::now();
        components = Some(connected_components(graph.as_ref())?);
        total += t0.elapsed();
    }
    let components = components.context("at least one repetition ran")?;

    let verbose = vertices <= VERBOSE_LIMIT;
    let report = Report {
        kind,
        vertices,
        edges: graph.edge_count(),
        components: components.count(),
        largest: components.largest().unwrap_or(0),
        sizes: components.sizes().collect(),
        mean_analysis_ns: total.as_nanos() / u128::from(repetitions),
        edge_list: verbose.then(|| edges(graph.as_ref())).transpose()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if verbose {
        println!("A graph: {graph}");
        println!();
        println!("Its components:");
        for members in components.iter() {
            let line: Vec<String> = members.iter().map(ToString::to_string).collect();
            println!("  {}", line.join(" "));
        }
        println!();
    }

    println!(
        "For a {} graph with {} vertices and {} directed edges:",
        label(kind),
        report.vertices,
        report.edges
    );
    println!(" * Number of components: {}", report.components);
    println!(" * Largest component: {}", report.largest);
    println!(
        " * Mean analysis time: {} ns over {repetitions} runs",
        report.mean_analysis_ns
    );
    Ok(())
}

fn label(kind: GraphKind) -> &'static str {
    match kind {
        GraphKind::Dense => "dense matrix",
        GraphKind::Sparse => "sparse adjacency-map",
    }
}
