//! Script language: one command per line.
//!
//! Blank lines and lines starting with `#` are ignored. Tokens are separated
//! by whitespace, so vertex names cannot contain spaces.

use grafos::Weight;
use thiserror::Error;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `directed on|off`
    Directed(bool),
    /// `negative on|off`
    Negative(bool),
    /// `vertex [NAME]`; without a name the next automatic name is used.
    Vertex(Option<String>),
    /// `edge U V [W]`
    Edge {
        from: String,
        to: String,
        weight: Weight,
    },
    /// `remove-vertex N`
    RemoveVertex(String),
    /// `remove-edge U V`
    RemoveEdge { from: String, to: String },
    /// `adjacent U V`
    Adjacent(String, String),
    /// `list`
    List,
    /// `mst`
    Mst,
    /// `tree`
    Tree,
    /// `dijkstra N`
    Dijkstra(String),
    /// `bfs N`
    Bfs(String),
    /// `dfs N`
    Dfs(String),
    /// `components`
    Components,
    /// `adjacency-matrix`
    AdjacencyMatrix,
    /// `incidence-matrix`
    IncidenceMatrix,
    /// `coloring`
    Coloring,
    /// `clear`
    Clear,
}

/// Weight used by `edge U V` when none is given.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Errors raised while parsing a script line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first token is not a known command.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A required argument is absent.
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        /// Command being parsed.
        command: String,
        /// Usage of the missing part.
        expected: &'static str,
    },

    /// More tokens than the command accepts.
    #[error("unexpected argument '{argument}' for '{command}'")]
    UnexpectedArgument {
        /// Command being parsed.
        command: String,
        /// First surplus token.
        argument: String,
    },

    /// The weight is not an integer.
    #[error("invalid weight '{0}': expected an integer")]
    InvalidWeight(String),

    /// A switch is neither `on` nor `off`.
    #[error("invalid switch '{0}': expected 'on' or 'off'")]
    InvalidSwitch(String),
}

/// Remaining tokens of one line.
struct Args<'a> {
    command: &'a str,
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.tokens
            .next()
            .ok_or_else(|| ParseError::MissingArgument {
                command: self.command.to_string(),
                expected,
            })
    }

    fn optional(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.tokens.next() {
            Some(extra) => Err(ParseError::UnexpectedArgument {
                command: self.command.to_string(),
                argument: extra.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn switch(&mut self) -> Result<bool, ParseError> {
        match self.required("'on' or 'off'")? {
            s if s.eq_ignore_ascii_case("on") => Ok(true),
            s if s.eq_ignore_ascii_case("off") => Ok(false),
            other => Err(ParseError::InvalidSwitch(other.to_string())),
        }
    }
}

fn parse_weight(token: &str) -> Result<Weight, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidWeight(token.to_string()))
}

/// Parses one script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let name = keyword.to_ascii_lowercase();
    let mut args = Args {
        command: &name,
        tokens,
    };

    let parsed = match name.as_str() {
        "directed" => Command::Directed(args.switch()?),
        "negative" => Command::Negative(args.switch()?),
        "vertex" => Command::Vertex(args.optional().map(str::to_string)),
        "edge" => {
            let from = args.required("two vertex names")?.to_string();
            let to = args.required("two vertex names")?.to_string();
            let weight = match args.optional() {
                Some(token) => parse_weight(token)?,
                None => DEFAULT_WEIGHT,
            };
            Command::Edge { from, to, weight }
        }
        "remove-vertex" => Command::RemoveVertex(args.required("a vertex name")?.to_string()),
        "remove-edge" => Command::RemoveEdge {
            from: args.required("two vertex names")?.to_string(),
            to: args.required("two vertex names")?.to_string(),
        },
        "adjacent" => Command::Adjacent(
            args.required("two vertex names")?.to_string(),
            args.required("two vertex names")?.to_string(),
        ),
        "dijkstra" => Command::Dijkstra(args.required("an origin vertex")?.to_string()),
        "bfs" => Command::Bfs(args.required("an origin vertex")?.to_string()),
        "dfs" => Command::Dfs(args.required("an origin vertex")?.to_string()),
        "list" => Command::List,
        "mst" => Command::Mst,
        "tree" => Command::Tree,
        "components" => Command::Components,
        "adjacency-matrix" => Command::AdjacencyMatrix,
        "incidence-matrix" => Command::IncidenceMatrix,
        "coloring" => Command::Coloring,
        "clear" => Command::Clear,
        _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
    };
    args.finish()?;
    Ok(Some(parsed))
}
