use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use hookcc_core::{Edge, Graph};
use tracing::{debug, instrument, warn};

use crate::errors::EdgeListError;

/// Graph read from an edge-list file, with the loader's bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedGraph {
    /// The accepted edges over the declared node universe.
    pub graph: Graph,
    /// Edge count announced by the header.
    pub declared_edges: usize,
    /// Self-loop records dropped while reading.
    pub discarded_self_loops: usize,
}

/// Reads graphs in the `n m` / `a b` edge-list format.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use hookcc_providers_edgelist::EdgeListLoader;
///
/// let loaded = EdgeListLoader::try_from_reader(Cursor::new("3 3\n0 0\n0 1\n1 2\n"))?;
/// assert_eq!(loaded.graph.node_count(), 3);
/// assert_eq!(loaded.graph.edge_count(), 2);
/// assert_eq!(loaded.discarded_self_loops, 1);
/// # Ok::<(), hookcc_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Debug)]
pub struct EdgeListLoader;

impl EdgeListLoader {
    /// Opens `path` and reads a graph from it.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened or read,
    /// and the format errors described on [`Self::try_from_reader`].
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<LoadedGraph, EdgeListError> {
        let file = File::open(path.as_ref())?;
        Self::try_from_reader(BufReader::new(file))
    }

    /// Reads a graph from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] on read failures,
    /// [`EdgeListError::InvalidUtf8`] when the input is not UTF-8 text,
    /// [`EdgeListError::MissingHeader`] when fewer than two tokens are
    /// present, [`EdgeListError::InvalidInteger`] for tokens that are not
    /// non-negative integers, [`EdgeListError::TruncatedEdgeList`] when fewer
    /// than `m` records follow, and [`EdgeListError::NodeOutOfRange`] when a
    /// record names a node outside `0..n`.
    #[instrument(name = "loader.read", err, skip(reader))]
    pub fn try_from_reader<R: Read>(mut reader: R) -> Result<LoadedGraph, EdgeListError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(|err| EdgeListError::InvalidUtf8 {
            line: line_of_offset(err.as_bytes(), err.utf8_error().valid_up_to()),
        })?;

        let mut tokens = Tokens::new(&text);
        let (Some(node_count), Some(declared_edges)) = (tokens.next(), tokens.next()) else {
            return Err(EdgeListError::MissingHeader);
        };
        let node_count = node_count.parse_usize()?;
        let declared_edges = declared_edges.parse_usize()?;

        let mut edges = Vec::new();
        let mut discarded_self_loops = 0;
        for found in 0..declared_edges {
            let (Some(source), Some(target)) = (tokens.next(), tokens.next()) else {
                return Err(EdgeListError::TruncatedEdgeList {
                    declared: declared_edges,
                    found,
                });
            };
            let source = source.parse_node(node_count)?;
            let target = target.parse_node(node_count)?;
            if source == target {
                discarded_self_loops += 1;
            } else {
                edges.push(Edge::new(source, target));
            }
        }

        let trailing = tokens.count();
        if trailing > 0 {
            debug!(trailing, "ignoring tokens after the declared edge records");
        }
        if discarded_self_loops > 0 {
            warn!(discarded_self_loops, "discarded self-loop records");
        }

        Ok(LoadedGraph {
            graph: Graph::new(node_count, edges)?,
            declared_edges,
            discarded_self_loops,
        })
    }
}

/// Returns the 1-based line containing byte `offset`.
fn line_of_offset(bytes: &[u8], offset: usize) -> usize {
    bytes
        .get(..offset)
        .map_or(0, |prefix| prefix.iter().filter(|&&byte| byte == b'\n').count())
        + 1
}

struct Token<'a> {
    line: usize,
    text: &'a str,
}

impl Token<'_> {
    fn parse_usize(&self) -> Result<usize, EdgeListError> {
        self.text
            .parse()
            .map_err(|_| EdgeListError::InvalidInteger {
                line: self.line,
                token: self.text.to_owned(),
            })
    }

    fn parse_node(&self, node_count: usize) -> Result<usize, EdgeListError> {
        let node = self.parse_usize()?;
        if node >= node_count {
            return Err(EdgeListError::NodeOutOfRange {
                line: self.line,
                node,
                node_count,
            });
        }
        Ok(node)
    }
}

/// Whitespace-separated tokens tagged with their 1-based line number.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            current: None,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((line, words)) = &mut self.current
                && let Some(text) = words.next()
            {
                return Some(Token { line: *line, text });
            }
            let (index, line) = self.lines.next()?;
            self.current = Some((index + 1, line.split_whitespace()));
        }
    }
}
