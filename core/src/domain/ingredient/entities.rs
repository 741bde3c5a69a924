use std::path::PathBuf;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Label reported for an image that does not show a usable ingredient.
pub const NO_INGREDIENT_DETECTED: &str = "No ingredient detected";

/// Class the model emits for images that are not ingredients at all.
pub const NOT_INGREDIENT_CLASS: &str = "not ingredient";

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

pub fn is_sentinel(label: &str) -> bool {
    label.trim().eq_ignore_ascii_case(NO_INGREDIENT_DETECTED)
}

/// Raw classifier output, before any threshold is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
}

impl Detection {
    /// Low-confidence and non-ingredient classifications collapse into the
    /// sentinel label; the confidence is kept as reported.
    pub fn from_classification(classification: Classification, threshold: f32) -> Self {
        let rejected = classification.confidence < threshold
            || classification.label.eq_ignore_ascii_case(NOT_INGREDIENT_CLASS);

        let label = if rejected {
            NO_INGREDIENT_DETECTED.to_string()
        } else {
            classification.label
        };

        Self {
            label,
            confidence: classification.confidence,
        }
    }

    pub fn is_ingredient(&self) -> bool {
        !is_sentinel(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub file_name: String,
    pub path: PathBuf,
    pub url: String,
}
