//! Demo: building, serializing and decoding chat requests.
//!
//! Pass a path to a JSON chat request to decode it instead of the built-in
//! sample. Set `RUST_LOG=debug` to see why a document was rejected.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use serde_json::json;
use tokenizer_kit::ErrorKind;
use tokenizer_kit::prompts::{
    ChatRequest, Document, DocumentCodec, Message, MultiModalBlob, Tool, ToolFunction,
    ToolParameters, ToolProperty,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Tokenizer Kit: Chat Request Example ===\n");

    if let Some(path) = env::args().nth(1) {
        return decode_file(&path);
    }

    // Example 1: Serialize a request
    let request = sample_request();
    let text = request.to_json_string_pretty();
    println!("--- Example 1: Serialized request ---\n{text}\n");

    // Example 2: Decode it back
    let decoded: Result<ChatRequest, ErrorKind> = ChatRequest::from_json_str(&text).into();
    let decoded = decoded?;
    info!(
        messages = decoded.messages().len(),
        tools = decoded.tools().len(),
        documents = decoded.documents().len(),
        "decoded chat request"
    );
    println!(
        "--- Example 2: Round trip ---\nidentical: {}\n",
        decoded == request
    );

    // Example 3: Rejected documents
    demonstrate_failures();

    Ok(())
}

fn sample_request() -> ChatRequest {
    let weather = Tool::new(ToolFunction::new(
        "get_weather",
        "Look up the current weather for a city",
        ToolParameters::new()
            .with_required_property("city", ToolProperty::new("string", "city name"))
            .with_property(
                "unit",
                ToolProperty::new("string", "temperature unit")
                    .with_choices(["celsius", "fahrenheit"]),
            ),
    ));

    ChatRequest::new(vec![
        Message::system("You are a concise travel assistant."),
        Message::user("What should I pack for this place?")
            .with_data_object(MultiModalBlob::image(vec![0x89_u8, b'P', b'N', b'G'])),
    ])
    .with_tools(vec![weather])
    .with_documents(vec![Document::new(
        "Packing guide",
        "Layers work well in changeable weather.",
    )])
    .with_plugins(json!({ "date_string": "26 Jul 2024" }))
}

fn demonstrate_failures() {
    println!("--- Example 3: Rejected documents ---");

    let missing_properties = json!({ "type": "object", "required": [] });
    let outcome = ToolParameters::from_document(&missing_properties);
    println!("missing `properties`: {}", outcome.error_code());

    let bad_blob = json!({ "data": "***", "modality": "image" });
    let outcome = MultiModalBlob::from_document(&bad_blob);
    println!("invalid blob data:    {}", outcome.error_code());

    let outcome = ChatRequest::from_json_str("{ not json");
    println!("malformed text:       {}", outcome.error_code());
}

fn decode_file(path: &str) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let request = ChatRequest::try_from_document(
        &serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?,
    )
    .with_context(|| format!("decoding {path}"))?;

    info!(path, messages = request.messages().len(), "loaded chat request");
    for message in request.messages() {
        println!(
            "[{}] {} ({} attachment(s))",
            message.role(),
            message.content(),
            message.data_objects().len()
        );
    }
    Ok(())
}
