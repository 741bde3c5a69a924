use std::path::Path;

use tracing::info;

use crate::domain::{
    common::{ClassifierConfig, ClassifierKind, entities::app_errors::CoreError},
    ingredient::{
        entities::{Classification, UploadedImage},
        labels::default_labels,
        ports::IngredientClassifier,
    },
};

pub mod file_name;
pub mod gemini;
pub mod onnx;

pub use file_name::FileNameClassifier;
pub use gemini::GeminiIngredientClassifier;
pub use onnx::OnnxIngredientClassifier;

/// Classifier chosen at startup from configuration.
#[derive(Clone)]
pub enum ClassifierBackend {
    Onnx(OnnxIngredientClassifier),
    Gemini(GeminiIngredientClassifier),
    FileName(FileNameClassifier),
}

impl ClassifierBackend {
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, CoreError> {
        let labels = match &config.labels_path {
            Some(path) => load_labels(path)?,
            None => default_labels(),
        };

        let backend = match config.kind {
            ClassifierKind::Onnx => {
                Self::Onnx(OnnxIngredientClassifier::load(&config.model_path, labels)?)
            }
            ClassifierKind::Gemini => {
                let api_key = config.llm.gemini_api_key.clone().ok_or_else(|| {
                    CoreError::ClassifierError(
                        "a Gemini API key is required for the gemini classifier".to_string(),
                    )
                })?;
                Self::Gemini(GeminiIngredientClassifier::new(
                    api_key,
                    config.llm.gemini_model.clone(),
                    labels,
                ))
            }
            ClassifierKind::FileName => Self::FileName(FileNameClassifier::new(labels)),
        };

        info!(classifier = backend.name(), "Classifier ready");
        Ok(backend)
    }
}

impl IngredientClassifier for ClassifierBackend {
    fn name(&self) -> &'static str {
        match self {
            Self::Onnx(classifier) => classifier.name(),
            Self::Gemini(classifier) => classifier.name(),
            Self::FileName(classifier) => classifier.name(),
        }
    }

    async fn classify(&self, image: &UploadedImage) -> Result<Classification, CoreError> {
        match self {
            Self::Onnx(classifier) => classifier.classify(image).await,
            Self::Gemini(classifier) => classifier.classify(image).await,
            Self::FileName(classifier) => classifier.classify(image).await,
        }
    }
}

/// Reads one label per line, in model output order.
pub fn load_labels(path: &Path) -> Result<Vec<String>, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CoreError::ClassifierError(format!("failed to read labels {}: {}", path.display(), e))
    })?;

    let labels: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if labels.is_empty() {
        return Err(CoreError::ClassifierError(format!(
            "label file {} is empty",
            path.display()
        )));
    }

    Ok(labels)
}
