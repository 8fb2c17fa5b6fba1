use crate::error::BottleneckError;
use crate::types::{Graph, NodeId};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use thiserror::Error;

/// Error type returned by the itineraries readers.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("cannot read input")]
    Io(#[from] std::io::Error),
    #[error("input ended early, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("line {line}: `{token}` is not a valid number")]
    BadNumber { token: String, line: usize },
    #[error("edge references a node outside the graph")]
    Graph(#[from] BottleneckError),
}

/// A graph together with the queries asked about it.
#[derive(Debug, Clone)]
pub struct Itineraries {
    pub graph: Graph<i64>,
    pub queries: Vec<(NodeId, NodeId)>,
}

/// Reads an itineraries file.
///
/// Format, whitespace separated:
/// - `N M`, number of nodes and edges,
/// - `M` lines `a b w`, an edge between `a` and `b` of weight `w`,
/// - `Q`, number of queries (the query section may be missing),
/// - `Q` lines `u v`.
///
/// Nodes are numbered from 1 to N.
///
/// Example input:
/// ```text
/// 4 4
/// 1 2 5
/// 2 3 2
/// 3 4 9
/// 1 3 1
/// 2
/// 2 4
/// 2 1
/// ```
pub fn from_file(path: &str) -> Result<Itineraries, InputError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_itineraries(reader)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<Itineraries, InputError> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_itineraries(reader)
}

/// Whitespace separated tokens tagged with their (1-based) line number.
struct Tokens {
    tokens: std::vec::IntoIter<(usize, String)>,
}

impl Tokens {
    fn read<R: BufRead>(reader: R) -> Result<Self, InputError> {
        let mut tokens = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            tokens.extend(line.split_whitespace().map(|t| (i + 1, t.to_string())));
        }
        Ok(Self {
            tokens: tokens.into_iter(),
        })
    }

    fn is_done(&self) -> bool {
        self.tokens.len() == 0
    }

    fn next<T: std::str::FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let (line, token) = self
            .tokens
            .next()
            .ok_or(InputError::UnexpectedEnd { expected })?;
        token
            .parse()
            .map_err(|_| InputError::BadNumber { token, line })
    }
}

fn parse_itineraries<R: BufRead>(reader: R) -> Result<Itineraries, InputError> {
    let mut tokens = Tokens::read(reader)?;

    let n: usize = tokens.next("node count")?;
    let m: usize = tokens.next("edge count")?;
    let mut graph = Graph::new(n);
    for _ in 0..m {
        let a: NodeId = tokens.next("edge endpoint")?;
        let b: NodeId = tokens.next("edge endpoint")?;
        let w: i64 = tokens.next("edge weight")?;
        graph.add_edge(a, b, w)?;
    }

    let mut queries = Vec::new();
    if !tokens.is_done() {
        let q: usize = tokens.next("query count")?;
        queries.reserve(q);
        for _ in 0..q {
            let u: NodeId = tokens.next("query node")?;
            let v: NodeId = tokens.next("query node")?;
            queries.push((u, v));
        }
    }

    Ok(Itineraries { graph, queries })
}
