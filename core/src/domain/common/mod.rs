use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::ingredient::entities::DEFAULT_CONFIDENCE_THRESHOLD;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct PantryConfig {
    pub corpus: CorpusConfig,
    pub classifier: ClassifierConfig,
    pub uploads: UploadConfig,
    pub recommendation: RecommendationConfig,
}

#[derive(Clone, Debug)]
pub struct CorpusConfig {
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifierKind {
    Onnx,
    Gemini,
    FileName,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub kind: ClassifierKind,
    pub model_path: PathBuf,
    pub labels_path: Option<PathBuf>,
    pub confidence_threshold: f32,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub directory: PathBuf,
    /// URL prefix under which `directory` is served, e.g. `/uploads`.
    pub public_path: String,
}

#[derive(Clone, Debug)]
pub struct RecommendationConfig {
    pub top_n: usize,
    pub placeholder_image: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::Onnx,
            model_path: PathBuf::from("fruit_veg_classifier.onnx"),
            labels_path: None,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            llm: LLMConfig {
                gemini_api_key: None,
                gemini_model: "gemini-2.5-flash".to_string(),
            },
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            placeholder_image: "placeholder.png".to_string(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let nanos = now.timestamp_subsec_nanos();
    let timestamp = Timestamp::from_unix(NoContext, seconds, nanos);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
