pub mod attractions;
pub mod error;
pub mod hello;
pub mod reviews;
pub mod traits;

pub use attractions::SearchAttractions;
pub use error::ToolError;
pub use hello::Hello;
pub use reviews::AttractionReviews;
pub use traits::{ParameterSpec, ParameterType, Tool, ToolDescriptor};

use crate::config::ToolsConfig;
use crate::travel::TravelClient;
use crate::types::InvocationContext;
use tracing::{debug, error, info};

// ---------------------------------------------------------------------------
// Tool descriptors for the trigger host
// ---------------------------------------------------------------------------

/// Descriptors of every tool this process exposes, in registration order.
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        hello::descriptor(),
        attractions::descriptor(),
        reviews::descriptor(),
    ]
}

// ---------------------------------------------------------------------------
// Registry and dispatch
// ---------------------------------------------------------------------------

/// Immutable table of tools, built once at startup.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Register the standard tool set against one travel API client.
    pub fn new(client: TravelClient, config: &ToolsConfig) -> Self {
        Self::with_tools(vec![
            Box::new(Hello::new()),
            Box::new(SearchAttractions::new(client.clone(), config)),
            Box::new(AttractionReviews::new(client)),
        ])
    }

    pub fn with_tools(tools: Vec<Box<dyn Tool>>) -> Self {
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.descriptor().name == name)
            .map(|t| t.as_ref())
    }

    /// Dispatch a raw host context document to the named tool.
    ///
    /// Always returns a response string; failures come back as
    /// `{"error": ...}`.
    pub async fn dispatch(&self, name: &str, raw_context: &str) -> String {
        match InvocationContext::parse(raw_context) {
            Ok(ctx) => self.invoke(name, &ctx).await,
            Err(e) => {
                error!("Failed to parse invocation context for '{}': {}", name, e);
                ToolError::InvalidContext.to_response()
            }
        }
    }

    /// Invoke the named tool with an already-parsed context.
    pub async fn invoke(&self, name: &str, ctx: &InvocationContext) -> String {
        let Some(tool) = self.get(name) else {
            error!("Unknown tool: {}", name);
            return ToolError::UnknownTool(name.to_string()).to_response();
        };

        info!("Invoking tool '{}'", name);
        debug!("Arguments: {:?}", ctx.arguments);

        match tool.execute(ctx).await {
            Ok(output) => output,
            Err(e) => e.to_response(),
        }
    }
}
