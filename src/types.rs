//! Shared types used across the tool handlers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ---------------------------------------------------------------------------
// Invocation context
// ---------------------------------------------------------------------------

/// Payload delivered by the trigger host for a single tool call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationContext {
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl InvocationContext {
    /// Parse the raw context document handed over by the host.
    ///
    /// A `null` or missing `arguments` key is treated as no arguments.
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            arguments: Option<Map<String, Value>>,
        }

        let raw: Raw = serde_json::from_str(raw)?;
        Ok(Self {
            arguments: raw.arguments.unwrap_or_default(),
        })
    }

    /// Build a context from an `arguments` object.
    pub fn from_arguments(arguments: Value) -> Self {
        match arguments {
            Value::Object(arguments) => Self { arguments },
            _ => Self::default(),
        }
    }

    /// Raw argument value, if present and not `null`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name).filter(|v| !v.is_null())
    }

    /// Argument as a trimmed string. Non-string values read as absent.
    pub fn trimmed_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str).map(str::trim)
    }
}

// ---------------------------------------------------------------------------
// Normalized records
// ---------------------------------------------------------------------------

/// One attraction from a location search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttractionRecord {
    pub title: Option<String>,
    pub product_id: Option<String>,
    pub city_name: Option<String>,
    pub country_code: Option<String>,
}

/// One review of an attraction.
///
/// Unlike [`AttractionRecord`], the text-like fields keep whatever JSON
/// value upstream sent; review ids in particular may be numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub content: Option<Value>,
    pub id: Option<Value>,
    pub language: Option<Value>,
    pub numeric_rating: Option<Number>,
    pub user: Option<Value>,
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// Successful attraction search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractionsResponse {
    pub query: String,
    pub attractions: Vec<AttractionRecord>,
}

/// Successful review lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub id: String,
    pub reviews: Vec<ReviewRecord>,
}

/// Failure of any kind, reported as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
