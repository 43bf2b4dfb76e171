//! Operation schemas and the tool definitions advertised to the model.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Definition of a tool exposed to the inference model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Primitive argument types an operation may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
}

impl ParamType {
    /// JSON Schema type name.
    pub fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }

    /// Whether a parsed JSON value has this primitive type.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
        }
    }
}

/// One declared argument of an operation.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub param_type: ParamType,
    pub description: &'static str,
}

/// Schema check for a parsed argument object.
///
/// Returns the name of the first declared parameter that is absent or has the
/// wrong type. Fields the schema does not declare are ignored.
pub fn first_mismatch(params: &[ParamSpec], args: &Map<String, Value>) -> Option<&'static str> {
    params
        .iter()
        .find(|p| !args.get(p.name).is_some_and(|v| p.param_type.matches(v)))
        .map(|p| p.name)
}

/// Render a parameter list as a JSON Schema object.
pub fn parameters_schema(params: &[ParamSpec]) -> Value {
    let mut properties = Map::new();
    for p in params {
        properties.insert(
            p.name.to_string(),
            json!({
                "type": p.param_type.json_type(),
                "description": p.description,
            }),
        );
    }
    let required: Vec<&str> = params.iter().map(|p| p.name).collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}
