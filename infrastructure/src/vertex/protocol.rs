//! Request and response types for the Vertex AI Gemini REST API.
//!
//! Covers the subset of `streamGenerateContent` the assistant uses:
//! a single user content, an optional system instruction, function
//! declarations derived from the domain [`ToolSpec`], and streamed
//! candidate chunks on the way back.

use deepdesk_domain::tool::entities::{ToolDefinition, ToolSpec};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request body for `streamGenerateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDecl>,
}

impl GenerateContentRequest {
    /// Build a single-turn user query.
    ///
    /// An empty instruction is omitted rather than sent as an empty block.
    pub fn user_query(message: &str, instruction: Option<&str>, tools: Vec<ToolDecl>) -> Self {
        Self {
            contents: vec![Content::user(message)],
            system_instruction: instruction
                .filter(|text| !text.is_empty())
                .map(Content::system),
            tools,
        }
    }
}

/// A content block in a request
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// System instructions carry no role
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text part in a request content block
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Tool wrapper carrying function declarations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDecl {
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// A function the model may ask the runtime to invoke
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    /// JSON Schema object describing the parameters
    pub parameters: Value,
}

impl From<&ToolDefinition> for FunctionDeclaration {
    fn from(def: &ToolDefinition) -> Self {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in &def.parameters {
            properties.insert(
                param.name.clone(),
                json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(param.name.clone());
            }
        }
        Self {
            name: def.name.clone(),
            description: def.description.clone(),
            parameters: json!({
                "type": "object",
                "properties": Value::Object(properties),
                "required": required,
            }),
        }
    }
}

/// Convert a [`ToolSpec`] into the request's tool declarations.
///
/// Declarations are sorted by name so request bodies are deterministic.
/// An empty spec yields no `tools` entry at all.
pub fn tool_declarations(spec: &ToolSpec) -> Vec<ToolDecl> {
    if spec.is_empty() {
        return Vec::new();
    }
    let mut function_declarations: Vec<FunctionDeclaration> =
        spec.all().map(FunctionDeclaration::from).collect();
    function_declarations.sort_by(|a, b| a.name.cmp(&b.name));
    vec![ToolDecl {
        function_declarations,
    }]
}

/// One chunk of a streamed response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentChunk {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiErrorBody>,
}

/// A response candidate
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

/// Content of a response candidate
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A part of a response candidate.
///
/// Text parts carry incremental response text. Function call parts
/// appear when the model requests a tool invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "functionCall")]
    pub function_call: Option<FunctionCall>,
}

/// A function call requested by the model
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

/// Error body embedded in a response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}
