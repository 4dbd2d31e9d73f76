//! Dispatch of a parsed request to the algorithm its mode names.

use crate::{
    errors::SolverError,
    io::{Query, Request, Response},
    route_inspection::route_inspection,
    shortest_path::shortest_path,
    spanning_tree::{Extremum, spanning_forest},
    tsp::held_karp,
};
use log::debug;
use std::time::Instant;

/// Computes the response to `request`. Unreachable targets and missing tours yield
/// [`Response::NoPath`]; an error is returned if the exact method cannot be run at all or the
/// edges of a route inspection request are disconnected.
pub fn solve(request: &Request) -> Result<Response, SolverError> {
    let graph = &request.graph;
    let timer = Instant::now();

    let response = match request.query {
        Query::ShortestPath { source, target } => {
            shortest_path(graph, source, target).map_or(Response::NoPath, Response::Path)
        }
        Query::MinimumSpanningTree => {
            Response::SpanningForest(spanning_forest(graph, Extremum::Minimum))
        }
        Query::MaximumSpanningTree => {
            Response::SpanningForest(spanning_forest(graph, Extremum::Maximum))
        }
        Query::RouteInspection => {
            Response::ClosedWalk(route_inspection(graph)?)
        }
        Query::TravellingSalesman { start } => {
            held_karp(graph, start)?.map_or(Response::NoPath, Response::Tour)
        }
    };

    debug!(
        "solved {} in {}ms",
        request.query.mode(),
        timer.elapsed().as_millis()
    );

    Ok(response)
}
