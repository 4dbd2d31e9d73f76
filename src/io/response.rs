use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path as FilePath,
};

use itertools::Itertools;

use crate::{
    errors::*, graph::*, route_inspection::ClosedWalk, shortest_path::Path,
    spanning_tree::SpanningForest, tsp::Tour,
};

/// Printed whenever a request has no feasible result
pub const NO_PATH: &str = "NO_PATH";

/// The result of one request, in the shape it is printed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Path(Path),
    SpanningForest(SpanningForest),
    ClosedWalk(ClosedWalk),
    Tour(Tour),
    NoPath,
}

pub trait ResponseWriter {
    fn try_write<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_file<P: AsRef<FilePath>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl ResponseWriter for Response {
    fn try_write<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        match self {
            Response::Path(path) => {
                writeln!(writer, "{}", path.nodes().iter().join(" "))?;
            }
            Response::SpanningForest(forest) => {
                writeln!(writer, "{}", forest.total_weight())?;
                for WeightedEdge(u, v, _) in forest.edges() {
                    writeln!(writer, "{u} {v}")?;
                }
            }
            Response::ClosedWalk(walk) => {
                writeln!(writer, "{}", walk.cost())?;
                writeln!(writer, "{}", walk.nodes().iter().join(" "))?;
            }
            Response::Tour(tour) => {
                writeln!(writer, "{}", tour.cost())?;
                writeln!(writer, "{}", tour.nodes().iter().join(" "))?;
            }
            Response::NoPath => {
                writeln!(writer, "{NO_PATH}")?;
            }
        }

        writer.flush()
    }

    fn try_write_file<P: AsRef<FilePath>>(&self, path: P) -> Result<(), std::io::Error> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write(writer)
    }
}

impl<G: WeightedAdjacencyList> InvariantCheck<G, SolverError> for Response {
    fn is_correct(&self, graph: &G) -> Result<(), SolverError> {
        match self {
            Response::Path(path) => path.is_correct(graph),
            Response::SpanningForest(forest) => forest.is_correct(graph),
            Response::ClosedWalk(walk) => walk.is_correct(graph),
            Response::Tour(tour) => tour.is_correct(graph),
            Response::NoPath => Ok(()),
        }
    }
}
