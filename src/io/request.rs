use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
    str::FromStr,
};

use crate::{errors::RequestError, graph::*};

type Result<T> = std::result::Result<T, RequestError>;

/// The algorithm named on the first line of a request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    ShortestPath,
    MinimumSpanningTree,
    MaximumSpanningTree,
    RouteInspection,
    TravellingSalesman,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::ShortestPath,
        Mode::MinimumSpanningTree,
        Mode::MaximumSpanningTree,
        Mode::RouteInspection,
        Mode::TravellingSalesman,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Mode::ShortestPath => "dijkstra",
            Mode::MinimumSpanningTree => "mst",
            Mode::MaximumSpanningTree => "maxst",
            Mode::RouteInspection => "chinese",
            Mode::TravellingSalesman => "tsp",
        }
    }
}

impl FromStr for Mode {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .into_iter()
            .find(|m| m.keyword() == s)
            .ok_or_else(|| RequestError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A mode together with its parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    ShortestPath { source: Node, target: Node },
    MinimumSpanningTree,
    MaximumSpanningTree,
    RouteInspection,
    TravellingSalesman { start: Node },
}

impl Query {
    pub fn mode(&self) -> Mode {
        match self {
            Query::ShortestPath { .. } => Mode::ShortestPath,
            Query::MinimumSpanningTree => Mode::MinimumSpanningTree,
            Query::MaximumSpanningTree => Mode::MaximumSpanningTree,
            Query::RouteInspection => Mode::RouteInspection,
            Query::TravellingSalesman { .. } => Mode::TravellingSalesman,
        }
    }
}

/// One fully parsed request; the graph is immutable from here on.
#[derive(Clone, Debug)]
pub struct Request {
    pub graph: WeightedGraph,
    pub query: Query,
}

impl Request {
    pub fn try_read<R: BufRead>(reader: R) -> Result<Self> {
        RequestReader::new(reader).read_request()
    }

    pub fn try_read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        Self::try_read(BufReader::new(reader))
    }
}

/// Parses the request protocol as a stream of whitespace separated tokens; line breaks
/// carry no meaning.
pub struct RequestReader<R> {
    lines: Lines<R>,
    // tokens of the current line in reverse order
    pending: Vec<String>,
}

macro_rules! raise_error_unless {
    ($cond : expr, $error : expr) => {
        if !($cond) {
            return Err($error);
        }
    };
}

// no preallocation beyond this many edges before they have actually been read
const MAX_EDGE_PREALLOCATION: usize = 1 << 16;

impl<R: BufRead> RequestReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new(),
        }
    }

    /// Reads a complete request and fails if anything but whitespace follows it
    pub fn read_request(mut self) -> Result<Request> {
        let mode: Mode = self.next_token("mode")?.parse()?;

        let number_of_nodes: NumNodes = self.parse_next("number of nodes")?;
        let number_of_edges: NumEdges = self.parse_next("number of edges")?;

        let mut edges =
            Vec::with_capacity((number_of_edges as usize).min(MAX_EDGE_PREALLOCATION));
        for _ in 0..number_of_edges {
            let u = self.parse_node("edge endpoint", number_of_nodes)?;
            let v = self.parse_node("edge endpoint", number_of_nodes)?;
            let w = self.parse_weight()?;
            edges.push(WeightedEdge(u, v, w));
        }

        let query = match mode {
            Mode::ShortestPath => Query::ShortestPath {
                source: self.parse_node("source", number_of_nodes)?,
                target: self.parse_node("target", number_of_nodes)?,
            },
            Mode::MinimumSpanningTree => Query::MinimumSpanningTree,
            Mode::MaximumSpanningTree => Query::MaximumSpanningTree,
            Mode::RouteInspection => Query::RouteInspection,
            Mode::TravellingSalesman => Query::TravellingSalesman {
                start: self.parse_node("start", number_of_nodes)?,
            },
        };

        if let Some(token) = self.try_next_token()? {
            return Err(RequestError::TrailingInput(token));
        }

        Ok(Request {
            graph: WeightedGraph::from_edges(number_of_nodes, edges),
            query,
        })
    }

    fn try_next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }

            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    self.pending = line?.split_whitespace().rev().map(String::from).collect();
                }
            }
        }
    }

    fn next_token(&mut self, what: &'static str) -> Result<String> {
        self.try_next_token()?
            .ok_or(RequestError::MissingToken { what })
    }

    fn parse_next<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.next_token(what)?;
        match token.parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(RequestError::InvalidToken { what, token }),
        }
    }

    fn parse_weight(&mut self) -> Result<Weight> {
        let weight: Weight = self.parse_next("edge weight")?;
        raise_error_unless!(
            (1..=MAX_WEIGHT).contains(&weight),
            RequestError::WeightOutOfRange { weight }
        );
        Ok(weight)
    }

    fn parse_node(&mut self, what: &'static str, number_of_nodes: NumNodes) -> Result<Node> {
        let node: Node = self.parse_next(what)?;
        raise_error_unless!(
            node < number_of_nodes,
            RequestError::NodeOutOfRange {
                what,
                node,
                number_of_nodes
            }
        );
        Ok(node)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn read(text: &str) -> Result<Request> {
        Request::try_read(text.as_bytes())
    }

    #[test]
    fn shortest_path_request() {
        let request = read("dijkstra\n4 4\n0 1 4\n1 2 1\n0 2 2\n2 3 5\n0 3\n").unwrap();
        assert_eq!(
            request.query,
            Query::ShortestPath {
                source: 0,
                target: 3
            }
        );
        assert_eq!(request.graph.number_of_nodes(), 4);
        assert_eq!(
            request.graph.edges(),
            [
                WeightedEdge(0, 1, 4),
                WeightedEdge(1, 2, 1),
                WeightedEdge(0, 2, 2),
                WeightedEdge(2, 3, 5)
            ]
        );
    }

    #[test]
    fn line_breaks_are_insignificant() {
        let request = read("  tsp 3 2 0 1 7\n\n 1 2\n 8 2  ").unwrap();
        assert_eq!(request.query, Query::TravellingSalesman { start: 2 });
        assert_eq!(
            request.graph.edges(),
            [WeightedEdge(0, 1, 7), WeightedEdge(1, 2, 8)]
        );
    }

    #[test]
    fn modes_without_parameters() {
        for (text, query) in [
            ("mst", Query::MinimumSpanningTree),
            ("maxst", Query::MaximumSpanningTree),
            ("chinese", Query::RouteInspection),
        ] {
            let request = read(&format!("{text}\n2 1\n0 1 5\n")).unwrap();
            assert_eq!(request.query, query);
            assert_eq!(request.query.mode().to_string(), text);
        }
    }

    #[test]
    fn empty_graph() {
        let request = read("mst\n0 0\n").unwrap();
        assert!(request.graph.is_empty());
        assert_eq!(request.graph.number_of_edges(), 0);
    }

    #[test]
    fn unknown_mode() {
        assert!(matches!(
            read("bfs\n1 0\n"),
            Err(RequestError::UnknownMode(m)) if m == "bfs"
        ));
    }

    #[test]
    fn missing_tokens() {
        assert!(matches!(
            read(""),
            Err(RequestError::MissingToken { what: "mode" })
        ));
        assert!(matches!(
            read("mst\n3 2\n0 1 1\n"),
            Err(RequestError::MissingToken { .. })
        ));
        assert!(matches!(
            read("dijkstra\n2 1\n0 1 1\n0\n"),
            Err(RequestError::MissingToken { what: "target" })
        ));
    }

    #[test]
    fn invalid_tokens() {
        assert!(matches!(
            read("mst\n2 1\n0 1 -3\n"),
            Err(RequestError::InvalidToken { what: "edge weight", token }) if token == "-3"
        ));
        assert!(matches!(
            read("mst\ntwo 1\n"),
            Err(RequestError::InvalidToken { .. })
        ));
        assert!(matches!(
            read("mst\n2 1\n0 1 2.5\n"),
            Err(RequestError::InvalidToken { .. })
        ));
    }

    #[test]
    fn nodes_out_of_range() {
        assert!(matches!(
            read("mst\n2 1\n0 2 1\n"),
            Err(RequestError::NodeOutOfRange {
                node: 2,
                number_of_nodes: 2,
                ..
            })
        ));
        assert!(matches!(
            read("tsp\n0 0\n0\n"),
            Err(RequestError::NodeOutOfRange { what: "start", .. })
        ));
    }

    #[test]
    fn weights_out_of_range() {
        assert!(matches!(
            read("mst\n2 1\n0 1 0\n"),
            Err(RequestError::WeightOutOfRange { weight: 0 })
        ));
        assert!(matches!(
            read("mst\n3 2\n0 1 18446744073709551615\n1 2 2\n"),
            Err(RequestError::WeightOutOfRange { .. })
        ));
        assert!(matches!(
            read("mst\n2 1\n0 1 4294967296\n"),
            Err(RequestError::WeightOutOfRange { weight: 4294967296 })
        ));
        assert!(matches!(
            read("mst\n2 1\n0 1 18446744073709551616\n"),
            Err(RequestError::InvalidToken { what: "edge weight", .. })
        ));

        let request = read("mst\n2 1\n0 1 4294967295\n").unwrap();
        assert_eq!(request.graph.edges(), [WeightedEdge(0, 1, MAX_WEIGHT)]);
    }

    #[test]
    fn trailing_input() {
        assert!(matches!(
            read("mst\n2 1\n0 1 1\n0 1 1\n"),
            Err(RequestError::TrailingInput(t)) if t == "0"
        ));
    }

    #[test]
    fn huge_edge_count_fails_without_allocating() {
        assert!(matches!(
            read("mst\n2 4294967295\n0 1 1\n"),
            Err(RequestError::MissingToken { .. })
        ));
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "chinese\n3 3\n0 1 1\n1 2 1\n2 0 1\n").unwrap();
        file.flush().unwrap();

        let request = Request::try_read_file(file.path()).unwrap();
        assert_eq!(request.query, Query::RouteInspection);
        assert_eq!(request.graph.number_of_edges(), 3);

        assert!(matches!(
            Request::try_read_file(file.path().with_extension("missing")),
            Err(RequestError::Io(_))
        ));
    }
}
