//! `get_attractions`: attraction search at a location.

use crate::config::ToolsConfig;
use crate::extract::try_extract_attractions;
use crate::tools::error::to_json_string;
use crate::tools::{ParameterSpec, ParameterType, Tool, ToolDescriptor, ToolError};
use crate::travel::TravelClient;
use crate::types::{AttractionsResponse, InvocationContext};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub const NAME: &str = "get_attractions";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME.into(),
        description: "Retrieve attractions at a search location.".into(),
        parameters: vec![
            ParameterSpec::new(
                "query",
                ParameterType::String,
                "The search query for the location.",
            ),
            ParameterSpec::new(
                "languagecode",
                ParameterType::String,
                "The language code for the response.",
            ),
        ],
    }
}

/// Searches attractions through the travel API.
pub struct SearchAttractions {
    client: TravelClient,
    default_language_code: String,
    forward_language_code: bool,
    descriptor: ToolDescriptor,
}

impl SearchAttractions {
    pub fn new(client: TravelClient, config: &ToolsConfig) -> Self {
        Self {
            client,
            default_language_code: config.default_language_code.clone(),
            forward_language_code: config.forward_language_code,
            descriptor: descriptor(),
        }
    }

    /// Language code to send upstream.
    fn language_code<'a>(&'a self, ctx: &'a InvocationContext) -> &'a str {
        let requested = ctx.trimmed_str("languagecode").filter(|s| !s.is_empty());
        match requested {
            Some(code) if self.forward_language_code => code,
            Some(code) => {
                if code != self.default_language_code {
                    warn!(
                        "Ignoring requested language code '{}', sending '{}'",
                        code, self.default_language_code
                    );
                }
                &self.default_language_code
            }
            None => &self.default_language_code,
        }
    }
}

#[async_trait]
impl Tool for SearchAttractions {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn execute(&self, ctx: &InvocationContext) -> Result<String, ToolError> {
        let query = ctx.trimmed_str("query").unwrap_or_default();
        if query.is_empty() {
            error!("No search query provided.");
            return Err(ToolError::MissingArgument("No search query provided."));
        }

        let language_code = self.language_code(ctx);
        let doc = self
            .client
            .search_location(query, language_code)
            .await
            .map_err(ToolError::upstream)?;

        let attractions = try_extract_attractions(&doc).map_err(ToolError::extraction)?;
        if attractions.is_empty() {
            warn!("No attractions found in the response.");
        } else {
            info!("Retrieved {} attractions for '{}'", attractions.len(), query);
        }

        Ok(to_json_string(&AttractionsResponse {
            query: query.to_string(),
            attractions,
        }))
    }
}
