//! Gemini image metadata analyzer
//!
//! Sends uploaded image bytes to the Gemini generateContent endpoint with a
//! fixed instruction prompt and a constrained JSON output schema, and parses
//! the structured result. Exactly one network round-trip per invocation; no
//! retry.
//!
//! The `Analyzer` wrapper never fails: every failure mode (missing
//! credential, network error, bad status, empty or malformed response)
//! degrades to fixed fallback metadata so an upload is never blocked on the
//! external service.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use lumina_common::{Category, ImageMetadata};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, warn};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-2.5-flash";
const USER_AGENT: &str = "Lumina/0.1.0 (photo portfolio)";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fixed instruction prompt sent with every analysis request
const ANALYSIS_PROMPT: &str = "Analyze this photograph for a portfolio website. \
    1. Provide a creative and artistic title. \
    2. Provide a brief, engaging description (1-2 sentences). \
    3. Categorize it into exactly one of these categories: \
    Portraits, Landscapes, Events, Abstract.";

/// Analyzer client errors
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Empty response from analyzer")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    ParseError(String),
}

// ========================================
// Wire types (Gemini generateContent)
// ========================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    /// Standard base64 of the raw image bytes (lossless, no compression)
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini candidates envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Extract the structured metadata from a generateContent response
///
/// The first candidate's first text part must be a JSON object with exactly
/// `title`, `description`, and `suggestedCategory` (one of the four fixed
/// categories — anything else fails enum validation).
pub fn extract_metadata(response: GenerateContentResponse) -> Result<ImageMetadata, AnalyzerError> {
    let text = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(AnalyzerError::EmptyResponse)?;

    serde_json::from_str(&text).map_err(|e| AnalyzerError::ParseError(e.to_string()))
}

// ========================================
// Gemini client
// ========================================

/// Gemini API client
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, AnalyzerError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AnalyzerError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key,
        })
    }

    /// Analyze one image: single round-trip, structured JSON output
    pub async fn analyze(
        &self,
        image_bytes: &[u8],
        mime_type: &str,
    ) -> Result<ImageMetadata, AnalyzerError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart {
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: BASE64.encode(image_bytes),
                        }),
                        text: None,
                    },
                    RequestPart {
                        inline_data: None,
                        text: Some(ANALYSIS_PROMPT.to_string()),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: Self::response_schema(),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            GEMINI_BASE_URL, GEMINI_MODEL
        );

        debug!(mime_type, byte_count = image_bytes.len(), "Requesting image analysis");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalyzerError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::ApiError(status.as_u16(), body));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::ParseError(e.to_string()))?;

        extract_metadata(envelope)
    }

    /// Output schema constraining the category to the closed set
    fn response_schema() -> serde_json::Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "suggestedCategory": {
                    "type": "STRING",
                    "enum": Category::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
                },
            },
            "required": ["title", "description", "suggestedCategory"],
        })
    }
}

// ========================================
// Analyzer wrapper (never fails)
// ========================================

/// Outcome of one analysis attempt
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Metadata to pre-fill the upload form with
    pub metadata: ImageMetadata,
    /// Degradation cause when fallback metadata was substituted
    pub degraded: Option<String>,
}

/// Metadata analyzer with graceful degradation
///
/// Holds the Gemini client when a credential is configured. `analyze`
/// absorbs every failure into the fixed fallback metadata; failure is
/// logged, never surfaced to the uploader.
pub struct Analyzer {
    client: Option<GeminiClient>,
}

impl Analyzer {
    /// Build from an optional API key
    pub fn new(api_key: Option<String>) -> Self {
        let client = api_key.and_then(|key| match GeminiClient::new(key) {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Failed to initialize Gemini client: {}", e);
                None
            }
        });

        if client.is_none() {
            warn!("Analyzer running without Gemini client; all uploads get fallback metadata");
        }

        Self { client }
    }

    /// The fixed metadata substituted whenever analysis fails
    pub fn fallback_metadata() -> ImageMetadata {
        ImageMetadata {
            title: "Untitled Upload".to_string(),
            description: "A beautiful photograph.".to_string(),
            suggested_category: Category::Abstract,
        }
    }

    /// Analyze image bytes; always produces metadata
    pub async fn analyze(&self, image_bytes: &[u8], mime_type: &str) -> AnalysisOutcome {
        let client = match &self.client {
            Some(client) => client,
            None => {
                return AnalysisOutcome {
                    metadata: Self::fallback_metadata(),
                    degraded: Some("API key not configured".to_string()),
                }
            }
        };

        match client.analyze(image_bytes, mime_type).await {
            Ok(metadata) => AnalysisOutcome {
                metadata,
                degraded: None,
            },
            Err(e) => {
                error!("Image analysis failed: {}", e);
                AnalysisOutcome {
                    metadata: Self::fallback_metadata(),
                    degraded: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope_with_text(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: Some(vec![CandidatePart {
                        text: Some(text.to_string()),
                    }]),
                }),
            }]),
        }
    }

    #[test]
    fn well_formed_response_passes_through_unchanged() {
        let metadata = extract_metadata(envelope_with_text(
            r#"{"title":"Sunset Ridge","description":"A warm glow over the hills.","suggestedCategory":"Landscapes"}"#,
        ))
        .unwrap();
        assert_eq!(metadata.title, "Sunset Ridge");
        assert_eq!(metadata.description, "A warm glow over the hills.");
        assert_eq!(metadata.suggested_category, Category::Landscapes);
    }

    #[test]
    fn empty_candidates_is_empty_response() {
        let result = extract_metadata(GenerateContentResponse { candidates: None });
        assert!(matches!(result, Err(AnalyzerError::EmptyResponse)));

        let result = extract_metadata(GenerateContentResponse {
            candidates: Some(vec![]),
        });
        assert!(matches!(result, Err(AnalyzerError::EmptyResponse)));
    }

    #[test]
    fn blank_text_part_is_empty_response() {
        let result = extract_metadata(envelope_with_text("   "));
        assert!(matches!(result, Err(AnalyzerError::EmptyResponse)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = extract_metadata(envelope_with_text("not json at all"));
        assert!(matches!(result, Err(AnalyzerError::ParseError(_))));
    }

    #[test]
    fn out_of_enumeration_category_is_parse_error() {
        let result = extract_metadata(envelope_with_text(
            r#"{"title":"T","description":"D","suggestedCategory":"Street"}"#,
        ));
        assert!(matches!(result, Err(AnalyzerError::ParseError(_))));
    }

    #[test]
    fn fallback_metadata_is_the_fixed_tuple() {
        let fallback = Analyzer::fallback_metadata();
        assert_eq!(fallback.title, "Untitled Upload");
        assert_eq!(fallback.description, "A beautiful photograph.");
        assert_eq!(fallback.suggested_category, Category::Abstract);
    }

    #[tokio::test]
    async fn analyzer_without_client_degrades_to_fallback() {
        let analyzer = Analyzer::new(None);
        let outcome = analyzer.analyze(&[0xFF, 0xD8, 0xFF], "image/jpeg").await;
        assert_eq!(outcome.metadata, Analyzer::fallback_metadata());
        assert!(outcome.degraded.is_some());
    }

    #[test]
    fn response_schema_constrains_category_enum() {
        let schema = GeminiClient::response_schema();
        let enum_values = schema["properties"]["suggestedCategory"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(enum_values.len(), 4);
        assert!(enum_values.contains(&json!("Portraits")));
        assert!(enum_values.contains(&json!("Abstract")));
    }
}
