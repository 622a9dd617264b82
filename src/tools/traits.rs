//! Tool trait and the descriptor metadata handed to the trigger host.

use crate::tools::ToolError;
use crate::types::InvocationContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

/// Declared type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Integer,
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// One entry of a tool's parameter list, in the host's `toolProperties` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(rename = "propertyName")]
    pub name: String,
    #[serde(rename = "propertyType")]
    pub kind: ParameterType,
    pub description: String,
}

impl ParameterSpec {
    pub fn new(name: &str, kind: ParameterType, description: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
        }
    }
}

/// Static metadata the host uses to route invocations to a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    #[serde(rename = "toolName")]
    pub name: String,
    pub description: String,
    #[serde(rename = "toolProperties")]
    pub parameters: Vec<ParameterSpec>,
}

impl ToolDescriptor {
    /// The parameter list encoded as the host binding expects it.
    pub fn tool_properties_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.parameters)
    }

    /// Trigger binding entry: `toolProperties` is carried as a JSON string.
    pub fn host_binding(&self) -> serde_json::Result<Value> {
        Ok(json!({
            "toolName": self.name,
            "description": self.description,
            "toolProperties": self.tool_properties_json()?,
        }))
    }

    /// The parameter list as a JSON Schema object.
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    json!({ "type": p.kind, "description": p.description }),
                )
            })
            .collect();

        json!({ "type": "object", "properties": properties })
    }

    /// Name, description and input schema, for schema-driven hosts.
    pub fn schema_entry(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

/// A tool the host can invoke by name.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Routing metadata; `descriptor().name` is the tool name.
    fn descriptor(&self) -> &ToolDescriptor;

    /// Handle one invocation and return the response string.
    async fn execute(&self, ctx: &InvocationContext) -> Result<String, ToolError>;
}
