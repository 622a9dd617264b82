use crate::tools::{Tool, ToolDescriptor, ToolError};
use crate::types::InvocationContext;
use async_trait::async_trait;

pub const NAME: &str = "hello_mcp";

const GREETING: &str = "Hello I am MCPTool!";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME.into(),
        description: "Hello world.".into(),
        parameters: Vec::new(),
    }
}

/// Fixed greeting; ignores its arguments.
pub struct Hello {
    descriptor: ToolDescriptor,
}

impl Hello {
    pub fn new() -> Self {
        Self {
            descriptor: descriptor(),
        }
    }
}

impl Default for Hello {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for Hello {
    fn descriptor(&self) -> &ToolDescriptor {
        &self.descriptor
    }

    async fn execute(&self, _ctx: &InvocationContext) -> Result<String, ToolError> {
        Ok(GREETING.to_string())
    }
}
