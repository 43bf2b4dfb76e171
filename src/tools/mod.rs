pub mod definition;

pub use definition::{ParamSpec, ParamType, ToolDefinition};

use crate::catalog::Catalog;
use crate::types::CallOutput;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// The catalog operations a tool call may route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Search,
    Get,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Search => write!(f, "search"),
            Self::Get => write!(f, "get"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListArgs {
    genre: String,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GetArgs {
    id: String,
}

impl Operation {
    /// Decode the validated arguments into the operation's typed form and run
    /// it against the catalog.
    pub fn run(self, catalog: &Catalog, args: Value) -> Result<CallOutput, serde_json::Error> {
        let output = match self {
            Self::List => {
                let args: ListArgs = serde_json::from_value(args)?;
                CallOutput::Many(catalog.list_by_genre(&args.genre))
            }
            Self::Search => {
                let args: SearchArgs = serde_json::from_value(args)?;
                CallOutput::Many(catalog.search_by_name(&args.name))
            }
            Self::Get => {
                let args: GetArgs = serde_json::from_value(args)?;
                CallOutput::One(catalog.get_by_id(&args.id))
            }
        };
        Ok(output)
    }
}

// ---------------------------------------------------------------------------
// Dispatch table
// ---------------------------------------------------------------------------

/// A registry entry: the declared argument shape of one operation.
#[derive(Debug)]
pub struct OperationSpec {
    pub name: &'static str,
    pub operation: Operation,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl OperationSpec {
    /// The tool definition advertised to the model for this entry.
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.into(),
            description: self.description.into(),
            parameters: definition::parameters_schema(self.params),
        }
    }
}

/// Every operation the model may call.
pub static OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "list",
        operation: Operation::List,
        description: "List books in a given genre.",
        params: &[ParamSpec {
            name: "genre",
            param_type: ParamType::String,
            description: "The genre of the books",
        }],
    },
    OperationSpec {
        name: "search",
        operation: Operation::Search,
        description: "Search for books by name. Returns the matching books, including their ids.",
        params: &[ParamSpec {
            name: "name",
            param_type: ParamType::String,
            description: "The name of the book",
        }],
    },
    OperationSpec {
        name: "get",
        operation: Operation::Get,
        description: "Get detailed information about a book by its id. \
                      Accepts ids only, not names; use 'search' to find a book's id.",
        params: &[ParamSpec {
            name: "id",
            param_type: ParamType::String,
            description: "The id of the book",
        }],
    },
];

/// Find a registry entry by exact, case-sensitive name.
pub fn lookup(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.iter().find(|spec| spec.name == name)
}

/// Build the list of tool definitions exposed to the inference model.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    OPERATIONS.iter().map(OperationSpec::definition).collect()
}
