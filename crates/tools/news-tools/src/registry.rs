//! Tool registry for name-based JSON dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use schemars::Schema;
use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;
use crate::fmt::TextFormat;
use crate::tool::Tool;

/// Result of a dispatch that carries both JSON data and rendered text.
#[derive(Debug, Clone)]
pub struct FormattedResult {
    /// The JSON-serialized output data.
    pub data: Value,
    /// Human-readable text rendered by the output's [`TextFormat`].
    pub text: String,
}

/// Type-erased tool for dynamic dispatch.
pub trait ErasedTool: Send + Sync {
    /// Get the tool's name.
    fn name(&self) -> &'static str;

    /// Get the tool's description.
    fn description(&self) -> &'static str;

    /// Get the input JSON schema.
    fn input_schema(&self) -> Schema;

    /// Call the tool with JSON arguments, returning JSON data and formatted text.
    fn call_json(&self, args: Value) -> BoxFuture<'static, Result<FormattedResult, ToolError>>;
}

struct Entry<T: Tool + Clone> {
    tool: T,
}

impl<T: Tool + Clone> ErasedTool for Entry<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn description(&self) -> &'static str {
        T::DESCRIPTION
    }

    fn input_schema(&self) -> Schema {
        schemars::schema_for!(T::Input)
    }

    fn call_json(&self, args: Value) -> BoxFuture<'static, Result<FormattedResult, ToolError>> {
        // Dispatchers send `null` for tools called without arguments
        let args = if args.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            args
        };

        let input: T::Input = match serde_json::from_value(args) {
            Ok(input) => input,
            Err(e) => return Box::pin(async move { Err(ToolError::invalid_input(e)) }),
        };

        let fut = self.tool.call(input);
        Box::pin(async move {
            let out = fut.await?;
            let text = out.fmt_text();
            let data = serde_json::to_value(&out).map_err(ToolError::internal)?;
            Ok(FormattedResult { data, text })
        })
    }
}

/// Registry mapping tool names to implementations.
pub struct ToolRegistry {
    map: BTreeMap<&'static str, Arc<dyn ErasedTool>>,
}

impl ToolRegistry {
    /// Create a new registry builder.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::default()
    }

    /// List all tool names in the registry, sorted.
    pub fn list_names(&self) -> Vec<&'static str> {
        self.map.keys().copied().collect()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ErasedTool>> {
        self.map.get(name)
    }

    /// Check if a tool is registered by name.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Description of the named tool.
    pub fn description(&self, name: &str) -> Option<&'static str> {
        self.map.get(name).map(|t| t.description())
    }

    /// Input JSON schema of the named tool.
    pub fn input_schema(&self, name: &str) -> Option<Schema> {
        self.map.get(name).map(|t| t.input_schema())
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Dispatch a tool call using JSON arguments.
    ///
    /// # Errors
    ///
    /// [`ToolError::InvalidInput`] for unknown names or undecodable arguments, otherwise
    /// whatever the tool returns.
    pub async fn dispatch_json(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        self.dispatch_json_formatted(name, args)
            .await
            .map(|r| r.data)
    }

    /// Dispatch a tool call, returning both JSON data and formatted text.
    ///
    /// # Errors
    ///
    /// Same as [`ToolRegistry::dispatch_json`].
    pub async fn dispatch_json_formatted(
        &self,
        name: &str,
        args: Value,
    ) -> Result<FormattedResult, ToolError> {
        let entry = self
            .map
            .get(name)
            .ok_or_else(|| ToolError::invalid_input(format!("Unknown tool: {name}")))?;
        debug!(tool = name, "dispatching tool call");
        entry.call_json(args).await
    }
}

/// Builder for constructing a [`ToolRegistry`].
#[derive(Default)]
pub struct ToolRegistryBuilder {
    map: BTreeMap<&'static str, Arc<dyn ErasedTool>>,
}

impl ToolRegistryBuilder {
    /// Register a tool. A later tool with the same name replaces the earlier one.
    #[must_use]
    pub fn register<T: Tool + Clone>(mut self, tool: T) -> Self {
        self.map.insert(T::NAME, Arc::new(Entry { tool }));
        self
    }

    /// Build the registry.
    pub fn finish(self) -> ToolRegistry {
        ToolRegistry { map: self.map }
    }
}
