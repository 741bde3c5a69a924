use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Classification, NOT_INGREDIENT_CLASS, UploadedImage},
        ports::IngredientClassifier,
    },
};

/// Vision classifier backed by the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiIngredientClassifier {
    api_key: String,
    model_name: String,
    labels: Vec<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct LabelAnswer {
    label: String,
    confidence: f32,
}

impl GeminiIngredientClassifier {
    pub fn new(api_key: String, model_name: String, labels: Vec<String>) -> Self {
        Self {
            api_key,
            model_name,
            labels,
            client: Client::new(),
        }
    }

    fn prompt(&self) -> String {
        format!(
            "Identify the single food ingredient shown in this image. \
             Answer with exactly one label from this list: {}. \
             If the image does not show one of these ingredients, answer \"{}\". \
             Report how confident you are as a number between 0 and 1.",
            self.labels.join(", "),
            NOT_INGREDIENT_CLASS
        )
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Classifier API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Classifier API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse classifier response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| {
                CoreError::ExternalServiceError("No response from classifier".to_string())
            })
    }
}

impl IngredientClassifier for GeminiIngredientClassifier {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, image), fields(file_name = %image.file_name))]
    async fn classify(&self, image: &UploadedImage) -> Result<Classification, CoreError> {
        let mime_type = image
            .content_type
            .clone()
            .filter(|content_type| content_type.starts_with("image/"))
            .unwrap_or_else(|| "image/jpeg".to_string());

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: self.prompt(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: general_purpose::STANDARD.encode(&image.data),
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: classification_schema(&self.labels),
            }),
        };

        let raw_response = self.call_gemini_api(request).await?;
        parse_classification(&raw_response, &self.labels)
    }
}

/// Response schema restricting the answer to one of `labels`.
pub fn classification_schema(labels: &[String]) -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "label": {
                "type": "STRING",
                "enum": labels,
            },
            "confidence": {
                "type": "NUMBER",
            },
        },
        "required": ["label", "confidence"],
    })
}

/// Labels outside the class list are treated as "not an ingredient".
pub fn parse_classification(raw: &str, labels: &[String]) -> Result<Classification, CoreError> {
    let answer: LabelAnswer = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("Invalid classifier answer: {}", e);
        CoreError::ExternalServiceError(format!("Invalid classifier answer: {}", e))
    })?;

    let label = answer.label.trim().to_lowercase();
    let label = labels
        .iter()
        .find(|known| known.to_lowercase() == label)
        .cloned()
        .unwrap_or_else(|| NOT_INGREDIENT_CLASS.to_string());

    Ok(Classification::new(label, answer.confidence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::labels::default_labels;

    #[test]
    fn test_parse_known_label() {
        let raw = r#"{"label": "Bell Pepper", "confidence": 0.82}"#;

        let classification = parse_classification(raw, &default_labels()).unwrap();

        assert_eq!(classification, Classification::new("bell pepper", 0.82));
    }

    #[test]
    fn test_parse_unknown_label_is_not_ingredient() {
        let raw = r#"{"label": "brick", "confidence": 0.9}"#;

        let classification = parse_classification(raw, &default_labels()).unwrap();

        assert_eq!(classification.label, NOT_INGREDIENT_CLASS);
    }

    #[test]
    fn test_parse_clamps_confidence() {
        let raw = r#"{"label": "kiwi", "confidence": 3.5}"#;

        let classification = parse_classification(raw, &default_labels()).unwrap();

        assert_eq!(classification.confidence, 1.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = parse_classification("kiwi, probably", &default_labels());

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[test]
    fn test_schema_lists_labels() {
        let labels = vec!["tomato".to_string(), "onion".to_string()];

        let schema = classification_schema(&labels);

        assert_eq!(schema["properties"]["label"]["enum"], json!(["tomato", "onion"]));
        assert_eq!(schema["required"], json!(["label", "confidence"]));
    }
}
