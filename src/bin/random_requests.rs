use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use ::log::{LevelFilter, info};
use anyhow::ensure;
use graph_engine::{log::build_logger_for_verbosity, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use structopt::StructOpt;

/// Writes a random request over a G(n,p) graph with uniform integer weights
#[derive(Debug, StructOpt)]
struct Opts {
    /// One of dijkstra, mst, maxst, chinese, tsp
    #[structopt(short, long)]
    mode: Mode,

    /// Number of nodes
    #[structopt(short)]
    n: Node,

    /// Probability of each node pair being joined by an edge
    #[structopt(short, default_value = "0.5")]
    p: f64,

    /// Weights are drawn uniformly from 1..=max-weight
    #[structopt(long, default_value = "100")]
    max_weight: Weight,

    /// Seed of the random generator; drawn from the OS if omitted
    #[structopt(long)]
    seed: Option<u64>,

    /// Request file; written to stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn write_request<W: Write>(
    mut writer: W,
    mode: Mode,
    graph: &WeightedGraph,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    writeln!(writer, "{mode}")?;
    writeln!(
        writer,
        "{} {}",
        graph.number_of_nodes(),
        graph.number_of_edges()
    )?;
    for WeightedEdge(u, v, w) in graph.edges() {
        writeln!(writer, "{u} {v} {w}")?;
    }

    let n = graph.number_of_nodes();
    match mode {
        Mode::ShortestPath => writeln!(writer, "{} {}", rng.gen_range(0..n), rng.gen_range(0..n))?,
        Mode::TravellingSalesman => writeln!(writer, "{}", rng.gen_range(0..n))?,
        Mode::MinimumSpanningTree | Mode::MaximumSpanningTree | Mode::RouteInspection => {}
    }

    writer.flush()
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    ensure!((0.0..=1.0).contains(&opts.p), "p must be a probability");
    ensure!(
        (1..=MAX_WEIGHT).contains(&opts.max_weight),
        "max-weight must be in 1..={MAX_WEIGHT}"
    );
    ensure!(
        opts.n > 0 || !matches!(opts.mode, Mode::ShortestPath | Mode::TravellingSalesman),
        "{} requests need at least one node",
        opts.mode
    );

    let seed = opts.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!("seed {seed}");
    let mut rng = Pcg64::seed_from_u64(seed);

    let graph = WeightedGraph::random_gnp(&mut rng, opts.n, opts.p, 1..=opts.max_weight);

    if let Some(path) = &opts.output {
        let writer = BufWriter::new(File::create(path)?);
        write_request(writer, opts.mode, &graph, &mut rng)?;
    } else {
        write_request(std::io::stdout().lock(), opts.mode, &graph, &mut rng)?;
    }

    Ok(())
}
