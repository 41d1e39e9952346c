//! Core tool trait.

use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ToolError;
use crate::fmt::TextFormat;

/// A named, typed operation that can also be invoked with JSON arguments.
///
/// # Example
///
/// ```ignore
/// use news_tools::{ToolError, tool::Tool};
/// use futures::future::BoxFuture;
///
/// #[derive(Clone)]
/// struct Echo;
///
/// impl Tool for Echo {
///     type Input = EchoInput;
///     type Output = EchoOutput;
///     const NAME: &'static str = "echo";
///     const DESCRIPTION: &'static str = "Echo the input back";
///
///     fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<Self::Output, ToolError>> {
///         Box::pin(async move { Ok(EchoOutput(input.0)) })
///     }
/// }
/// ```
pub trait Tool: Send + Sync + 'static {
    /// Input decoded from JSON arguments; its schema is published to dispatchers.
    type Input: DeserializeOwned + JsonSchema + Send + 'static;

    /// Output encoded back to JSON.
    type Output: Serialize + TextFormat + Send + 'static;

    /// Unique name identifying the tool.
    const NAME: &'static str;

    /// Human-readable description of what the tool does.
    const DESCRIPTION: &'static str;

    /// Execute the tool with the given input.
    fn call(&self, input: Self::Input) -> BoxFuture<'static, Result<Self::Output, ToolError>>;
}
