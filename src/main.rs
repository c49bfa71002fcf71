use std::str::FromStr;

use anyhow::{bail, Result};
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matrix_graph::{generators, MatrixGraph, NO_EDGE};

#[derive(Debug, Clone, Copy)]
enum Shape {
    Path,
    Cycle,
    Star,
    Complete,
    Bipartite,
    Bridged,
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "path" => Ok(Shape::Path),
            "cycle" => Ok(Shape::Cycle),
            "star" => Ok(Shape::Star),
            "complete" => Ok(Shape::Complete),
            "bipartite" => Ok(Shape::Bipartite),
            "bridged" => Ok(Shape::Bridged),
            _ => Err(format!(
                "unknown shape '{}', expected one of: path, cycle, star, complete, bipartite, bridged",
                s
            )),
        }
    }
}

#[derive(StructOpt, Debug)]
enum Query {
    /// Shortest path between two vertices
    ShortestPath {
        #[structopt(long)]
        from: usize,
        #[structopt(long)]
        to: usize,
    },
    /// Distance matrix between every pair of vertices
    AllPairs,
    /// Edges whose removal disconnects the graph
    Bridges,
    /// Vertices whose removal disconnects the graph
    Articulation {
        /// Use the slower component counting scan
        #[structopt(long)]
        by_components: bool,
    },
    /// Radius and center vertices
    Center,
    /// Connected components
    Components,
}

#[derive(StructOpt, Debug)]
#[structopt(
    name = "matrix-graph",
    about = "Runs a graph query against a generated undirected graph"
)]
struct Opt {
    /// One of path, cycle, star, complete, bipartite, bridged
    shape: Shape,
    /// Number of vertices, or size of the first part for bipartite
    /// and bridged graphs
    vertices: usize,
    /// Size of the second part for bipartite and bridged graphs
    #[structopt(long, default_value = "1")]
    second: usize,
    /// Show debug output, repeat for trace output. RUST_LOG overrides
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
    #[structopt(subcommand)]
    query: Query,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_graph(opt: &Opt) -> MatrixGraph {
    let n = opt.vertices;
    match opt.shape {
        Shape::Path => generators::path(n),
        Shape::Cycle => generators::cycle(n),
        Shape::Star => generators::star(n),
        Shape::Complete => generators::complete(n),
        Shape::Bipartite => generators::complete_bipartite(n, opt.second),
        Shape::Bridged => generators::bridged_complete(n, opt.second),
    }
}

fn format_weight(w: f64) -> String {
    if w == NO_EDGE {
        "inf".to_string()
    } else {
        format!("{}", w)
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_tracing(opt.verbose);

    let mut graph = build_graph(&opt);
    if graph.num_vertices() == 0 {
        bail!("the graph must have at least one vertex");
    }

    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "graph built"
    );
    println!("# vertices: {}", graph.num_vertices());
    println!("# edges: {}", graph.num_edges());

    match opt.query {
        Query::ShortestPath { from, to } => {
            match graph.shortest_path(from, to)? {
                Some(path) => {
                    let vertices: Vec<String> =
                        path.vertices.iter().map(|v| v.to_string()).collect();
                    println!("path: {}", vertices.join(" "));
                    println!("distance: {}", format_weight(path.distance));
                }
                None => println!("{} is unreachable from {}", to, from),
            }
        }
        Query::AllPairs => {
            let all = graph.all_pairs();
            for i in 0..all.num_vertices() {
                let row: Vec<String> =
                    all.row(i)?.iter().map(|&d| format_weight(d)).collect();
                println!("{}\t{}", i, row.join("\t"));
            }
        }
        Query::Bridges => {
            let bridges = graph.bridges();
            println!("# bridges: {}", bridges.len());
            for edge in bridges {
                println!("{}\t{}", edge.origin, edge.destination);
            }
        }
        Query::Articulation { by_components } => {
            let points = if by_components {
                graph.articulation_points_by_components()
            } else {
                graph.articulation_points()
            };
            println!("# articulation points: {}", points.len());
            for v in points {
                println!("{}", v);
            }
        }
        Query::Center => {
            let center = graph.center();
            println!("radius: {}", format_weight(center.radius));
            for v in center.vertices {
                println!("center: {}", v);
            }
        }
        Query::Components => {
            let comps = graph.components();
            println!("# of components: {}", comps.len());
            for comp in comps {
                print!("component:");
                for v in comp {
                    print!(" {}", v);
                }
                println!();
            }
        }
    }

    Ok(())
}
