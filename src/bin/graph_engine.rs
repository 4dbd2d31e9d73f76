use std::path::PathBuf;

use ::log::{LevelFilter, info};
use graph_engine::{log::build_logger_for_verbosity, prelude::*};
use structopt::StructOpt;

/// Reads one request, computes the exact answer and writes the response
#[derive(Debug, StructOpt)]
struct Opts {
    /// Request file; read from stdin if omitted
    #[structopt(short, long)]
    instance: Option<PathBuf>,

    /// Response file; written to stdout if omitted
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn load_request(path: &Option<PathBuf>) -> anyhow::Result<Request> {
    if let Some(path) = path {
        Ok(Request::try_read_file(path)?)
    } else {
        let stdin = std::io::stdin().lock();
        Ok(Request::try_read(stdin)?)
    }
}

fn write_response(response: &Response, path: &Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = path {
        response.try_write_file(path)?;
    } else {
        let stdout = std::io::stdout().lock();
        response.try_write(stdout)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opts.verbose);

    let request = load_request(&opts.instance)?;
    info!(
        "{} request on n={} m={}",
        request.query.mode(),
        request.graph.number_of_nodes(),
        request.graph.number_of_edges()
    );

    let response = solve(&request)?;

    #[cfg(debug_assertions)]
    response.is_correct(&request.graph)?;

    write_response(&response, &opts.output)?;

    Ok(())
}
