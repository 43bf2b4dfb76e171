//! Shared types used across the bookdb dispatch layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A single book in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Primary key, unique across the catalog.
    pub id: String,
    pub name: String,
    /// Category tag (many books per genre).
    pub genre: String,
    pub description: String,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        genre: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genre: genre.into(),
            description: description.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tool calls
// ---------------------------------------------------------------------------

/// A tool call selected by the model.
///
/// `arguments` is kept as the raw serialized text the model produced; it is
/// only parsed once the call reaches the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: String,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

impl fmt::Display for ToolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}

/// Result of executing a tool call against the catalog.
///
/// The shape depends on the operation: `list` and `search` yield a sequence,
/// `get` yields at most one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CallOutput {
    Many(Vec<Book>),
    One(Option<Book>),
}

impl CallOutput {
    /// All books carried by this output, in order.
    pub fn books(&self) -> Vec<&Book> {
        match self {
            Self::Many(books) => books.iter().collect(),
            Self::One(book) => book.iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Many(books) => books.is_empty(),
            Self::One(book) => book.is_none(),
        }
    }
}

// ---------------------------------------------------------------------------
// Multi-call policy
// ---------------------------------------------------------------------------

/// What to do when the model returns more than one tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiCallPolicy {
    /// Take the first call and drop the rest.
    #[default]
    First,
    /// Reject the response.
    Fail,
}

impl fmt::Display for MultiCallPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

impl FromStr for MultiCallPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "fail" => Ok(Self::Fail),
            other => Err(format!("unknown multi-call policy '{}' (expected first or fail)", other)),
        }
    }
}
