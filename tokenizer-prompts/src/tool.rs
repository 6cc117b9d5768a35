//! Tool declarations exposed to a model through the prompt.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::codec::DocumentCodec;
use crate::error::{PromptResult, SchemaError};

/// Schema type of [`ToolParameters`] unless overridden.
pub const OBJECT_SCHEMA: &str = "object";

/// Discriminator of function tools, the only kind defined today.
pub const FUNCTION_TOOL: &str = "function";

fn object_schema() -> String {
    OBJECT_SCHEMA.to_owned()
}

fn function_tool() -> String {
    FUNCTION_TOOL.to_owned()
}

/// Describes a single parameter of a tool function.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolProperty {
    #[serde(rename = "type")]
    kind: String,
    description: String,
    #[serde(default)]
    choices: Vec<String>,
}

impl ToolProperty {
    /// Creates a parameter description of the supplied type.
    #[must_use]
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Restricts the parameter to a list of literal values.
    #[must_use]
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the parameter type tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the allowed literal values, empty when unrestricted.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

/// Object-shaped schema listing the parameters of a tool function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameters {
    #[serde(rename = "type", default = "object_schema")]
    kind: String,
    required: Vec<String>,
    properties: BTreeMap<String, ToolProperty>,
}

impl ToolParameters {
    /// Creates an empty object schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the schema type tag.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Adds or replaces a parameter.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, property: ToolProperty) -> Self {
        self.properties.insert(name.into(), property);
        self
    }

    /// Adds a parameter and marks it as required.
    #[must_use]
    pub fn with_required_property(self, name: impl Into<String>, property: ToolProperty) -> Self {
        let name = name.into();
        let mut params = self.with_property(name.clone(), property);
        params.required.push(name);
        params
    }

    /// Replaces the list of required parameter names.
    #[must_use]
    pub fn with_required<I, S>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = required.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the schema type tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the required parameter names in declaration order.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Returns all parameters keyed by name.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, ToolProperty> {
        &self.properties
    }

    /// Looks up a single parameter.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&ToolProperty> {
        self.properties.get(name)
    }

    /// Returns `true` if `name` is listed as required.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }
}

impl Default for ToolParameters {
    fn default() -> Self {
        Self {
            kind: OBJECT_SCHEMA.to_owned(),
            required: Vec::new(),
            properties: BTreeMap::new(),
        }
    }
}

/// Callable function signature: a name, a description and its parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFunction {
    name: String,
    description: String,
    parameters: ToolParameters,
}

impl ToolFunction {
    /// Creates a function description.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: ToolParameters,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Returns the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description shown to the model.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameter schema.
    #[must_use]
    pub fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }
}

/// A tool the model may call.
///
/// `type` discriminates the payload; only [`FUNCTION_TOOL`] is defined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type", default = "function_tool")]
    kind: String,
    function: ToolFunction,
}

impl Tool {
    /// Wraps a function description as a tool.
    #[must_use]
    pub fn new(function: ToolFunction) -> Self {
        Self {
            kind: FUNCTION_TOOL.to_owned(),
            function,
        }
    }

    /// Overrides the discriminator.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Returns the tool discriminator.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the function payload.
    #[must_use]
    pub fn function(&self) -> &ToolFunction {
        &self.function
    }

    /// Shorthand for the function name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.function.name()
    }
}

impl Default for Tool {
    fn default() -> Self {
        Self::new(ToolFunction::default())
    }
}

impl DocumentCodec for ToolProperty {
    const NAME: &'static str = "tool_property";
}

impl DocumentCodec for ToolParameters {
    const NAME: &'static str = "tool_parameters";

    fn validate(&self) -> PromptResult<()> {
        let mut seen = HashSet::with_capacity(self.required.len());
        for name in &self.required {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::DuplicateRequired { name: name.clone() });
            }
        }
        Ok(())
    }
}

impl DocumentCodec for ToolFunction {
    const NAME: &'static str = "tool_function";

    fn validate(&self) -> PromptResult<()> {
        self.parameters.validate()
    }
}

impl DocumentCodec for Tool {
    const NAME: &'static str = "tool";

    fn validate(&self) -> PromptResult<()> {
        self.function.validate()
    }
}
