//! Chat turns, retrieval documents and the request aggregate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::blob::MultiModalBlob;
use crate::codec::DocumentCodec;
use crate::error::PromptResult;
use crate::tool::Tool;

/// A text passage supplied for retrieval-augmented generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    title: String,
    text: String,
}

impl Document {
    /// Creates a document.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Returns the document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A single chat turn.
///
/// The role is free-form so templates can define their own (`"user"`,
/// `"assistant"`, `"tool"`, or anything else). Tools listed on a message are
/// scoped to that turn; request-wide tools live on [`ChatRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: String,
    content: String,
    data_objects: Vec<MultiModalBlob>,
    #[serde(default)]
    tools: Vec<Tool>,
}

impl Message {
    /// Creates a text-only message.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            data_objects: Vec::new(),
            tools: Vec::new(),
        }
    }

    /// Creates a `user` message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an `assistant` message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Creates a `system` message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Appends a multi-modal attachment.
    #[must_use]
    pub fn with_data_object(mut self, blob: MultiModalBlob) -> Self {
        self.data_objects.push(blob);
        self
    }

    /// Replaces the attachments.
    #[must_use]
    pub fn with_data_objects(mut self, blobs: Vec<MultiModalBlob>) -> Self {
        self.data_objects = blobs;
        self
    }

    /// Replaces the tools declared on this turn.
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the attachments in order.
    #[must_use]
    pub fn data_objects(&self) -> &[MultiModalBlob] {
        &self.data_objects
    }

    /// Returns the tools declared on this turn.
    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }
}

/// Full input to a chat prompt template.
///
/// `plugins` carries model-specific structure the fixed schema does not cover.
/// It is passed through untouched; the template decides what it means.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    messages: Vec<Message>,
    tools: Vec<Tool>,
    documents: Vec<Document>,
    #[serde(default)]
    plugins: Value,
}

impl ChatRequest {
    /// Creates a request from the conversation so far.
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Declares the tools available for the whole conversation.
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    /// Attaches retrieval documents.
    #[must_use]
    pub fn with_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = documents;
        self
    }

    /// Sets the opaque plugin tree.
    #[must_use]
    pub fn with_plugins(mut self, plugins: Value) -> Self {
        self.plugins = plugins;
        self
    }

    /// Returns the messages in conversation order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the request-wide tools.
    #[must_use]
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Returns the retrieval documents.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Returns the plugin tree, `null` when unset.
    #[must_use]
    pub fn plugins(&self) -> &Value {
        &self.plugins
    }

    /// Looks up a top-level plugin entry.
    #[must_use]
    pub fn plugin(&self, key: &str) -> Option<&Value> {
        self.plugins.get(key)
    }
}

impl DocumentCodec for Document {
    const NAME: &'static str = "document";
}

impl DocumentCodec for Message {
    const NAME: &'static str = "message";

    fn validate(&self) -> PromptResult<()> {
        self.tools.iter().try_for_each(Tool::validate)
    }
}

impl DocumentCodec for ChatRequest {
    const NAME: &'static str = "chat_request";

    fn validate(&self) -> PromptResult<()> {
        self.messages.iter().try_for_each(Message::validate)?;
        self.tools.iter().try_for_each(Tool::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::error::SchemaError;
    use crate::tool::{ToolFunction, ToolParameters, ToolProperty};

    fn lookup_tool() -> Tool {
        Tool::new(ToolFunction::new(
            "lookup",
            "Search the knowledge base",
            ToolParameters::new()
                .with_required_property("query", ToolProperty::new("string", "search terms")),
        ))
    }

    #[test]
    fn document_serializes_title_and_text() {
        let document = Document::new("Rust", "A systems language.");
        assert_eq!(
            document.to_document(),
            json!({ "title": "Rust", "text": "A systems language." })
        );
    }

    #[test]
    fn message_tools_default_to_empty() {
        let message = Message::from_document(&json!({
            "role": "user",
            "content": "hi",
            "data_objects": [],
        }))
        .into_value();
        assert_eq!(message, Message::user("hi"));
        assert_eq!(message.to_document()["tools"], json!([]));
    }

    #[test]
    fn request_emits_every_field() {
        let value = ChatRequest::new(vec![Message::system("be brief")]).to_document();
        assert_eq!(
            value,
            json!({
                "messages": [{
                    "role": "system",
                    "content": "be brief",
                    "data_objects": [],
                    "tools": [],
                }],
                "tools": [],
                "documents": [],
                "plugins": null,
            })
        );
    }

    #[test]
    fn plugins_pass_through_untouched() {
        let plugins = json!({
            "date_string": "26 Jul 2024",
            "controls": { "thinking": true, "length": [1, 2.5, null] },
        });
        let request = ChatRequest::new(vec![Message::user("hello")])
            .with_documents(vec![Document::new("a", "b")])
            .with_tools(vec![lookup_tool()])
            .with_plugins(plugins.clone());

        let decoded = ChatRequest::from_document(&request.to_document()).into_value();
        assert_eq!(decoded.plugins(), &plugins);
        assert_eq!(decoded.plugin("date_string"), Some(&json!("26 Jul 2024")));
        assert_eq!(decoded, request);
    }

    #[test]
    fn plugins_default_to_null() {
        let request = ChatRequest::from_document(&json!({
            "messages": [],
            "tools": [],
            "documents": [],
        }))
        .into_value();
        assert!(request.plugins().is_null());
        assert_eq!(request.plugin("anything"), None);
    }

    #[test]
    fn nested_duplicate_required_is_rejected() {
        let document = json!({
            "messages": [{
                "role": "user",
                "content": "call it",
                "data_objects": [],
                "tools": [{
                    "type": "function",
                    "function": {
                        "name": "lookup",
                        "description": "",
                        "parameters": {
                            "type": "object",
                            "required": ["query", "query"],
                            "properties": {},
                        },
                    },
                }],
            }],
            "tools": [],
            "documents": [],
        });

        let err = ChatRequest::try_from_document(&document).expect_err("duplicate required");
        assert!(matches!(err, SchemaError::DuplicateRequired { name } if name == "query"));
    }

    #[test]
    fn wrong_shape_is_a_schema_error() {
        let err = Message::try_from_document(&json!({
            "role": "user",
            "content": "hi",
            "data_objects": "not a list",
        }))
        .expect_err("data_objects must be a list");
        assert!(matches!(err, SchemaError::Shape { .. }));
    }
}
