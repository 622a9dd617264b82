//! `get_attraction_reviews`: paged reviews for one attraction.

use crate::extract::try_extract_reviews;
use crate::tools::error::to_json_string;
use crate::tools::{ParameterSpec, ParameterType, Tool, ToolDescriptor, ToolError};
use crate::travel::TravelClient;
use crate::types::{InvocationContext, ReviewsResponse};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info, warn};

pub const NAME: &str = "get_attraction_reviews";

const DEFAULT_PAGE: &str = "1";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME.into(),
        description: "Retrieve reviews for a specific attraction.".into(),
        parameters: vec![
            ParameterSpec::new("id", ParameterType::String, "The ID of the attraction."),
            ParameterSpec::new(
                "page",
                ParameterType::Integer,
                "The page number for reviews.",
            ),
        ],
    }
}

/// Fetches attraction reviews through the travel API.
pub struct AttractionReviews {
    client: TravelClient,
    descriptor: ToolDescriptor,
}

impl AttractionReviews {
    pub fn new(client: TravelClient) -> Self {
        Self {
            client,
            descriptor: descriptor(),
        }
    }
}

/// `page` is forwarded as given: no coercion, only the default when absent.
fn page_param(ctx: &InvocationContext) -> String {
    match ctx.get("page") {
        None => DEFAULT_PAGE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[async_trait]
impl Tool for AttractionReviews {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn execute(&self, ctx: &InvocationContext) -> Result<String, ToolError> {
        let id = ctx.trimmed_str("id").unwrap_or_default();
        if id.is_empty() {
            error!("No attraction ID provided.");
            return Err(ToolError::MissingArgument("No attraction ID provided."));
        }

        let page = page_param(ctx);
        let doc = self
            .client
            .get_attraction_reviews(id, &page)
            .await
            .map_err(ToolError::upstream)?;

        let reviews = try_extract_reviews(&doc).map_err(ToolError::extraction)?;
        if reviews.is_empty() {
            warn!("No reviews found in the response.");
        } else {
            info!("Retrieved {} reviews for attraction {} (page {})", reviews.len(), id, page);
        }

        Ok(to_json_string(&ReviewsResponse {
            id: id.to_string(),
            reviews,
        }))
    }
}
