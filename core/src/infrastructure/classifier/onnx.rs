use std::{path::Path, sync::Arc};

use image::{DynamicImage, imageops::FilterType};
use tracing::{info, instrument};
use tract_onnx::prelude::*;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Classification, UploadedImage},
        ports::IngredientClassifier,
    },
};

pub const INPUT_SIZE: u32 = 224;

const MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const STD: [f32; 3] = [0.229, 0.224, 0.225];

type OnnxPlan = TypedRunnableModel<TypedModel>;

/// Fruit and vegetable classifier exported to ONNX, run with tract.
#[derive(Clone)]
pub struct OnnxIngredientClassifier {
    model: Arc<OnnxPlan>,
    labels: Arc<[String]>,
}

impl OnnxIngredientClassifier {
    pub fn load(model_path: &Path, labels: Vec<String>) -> Result<Self, CoreError> {
        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(
                        f32::datum_type(),
                        tvec!(1, 3, INPUT_SIZE as usize, INPUT_SIZE as usize),
                    ),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| {
                CoreError::ClassifierError(format!(
                    "failed to load model {}: {}",
                    model_path.display(),
                    e
                ))
            })?;

        info!(
            model = %model_path.display(),
            labels = labels.len(),
            "ONNX classifier loaded"
        );

        Ok(Self {
            model: Arc::new(model),
            labels: Arc::from(labels),
        })
    }

    fn infer(model: &OnnxPlan, input: Vec<f32>) -> TractResult<Vec<f32>> {
        let size = INPUT_SIZE as usize;
        let tensor: Tensor =
            tract_ndarray::Array4::from_shape_vec((1, 3, size, size), input)?.into();
        let outputs = model.run(tvec!(tensor.into()))?;
        let logits = outputs[0].to_array_view::<f32>()?;

        Ok(logits.iter().copied().collect())
    }
}

impl IngredientClassifier for OnnxIngredientClassifier {
    fn name(&self) -> &'static str {
        "onnx"
    }

    #[instrument(skip(self, upload), fields(file_name = %upload.file_name))]
    async fn classify(&self, upload: &UploadedImage) -> Result<Classification, CoreError> {
        let model = Arc::clone(&self.model);
        let data = upload.data.clone();

        let logits = tokio::task::spawn_blocking(move || {
            let decoded = image::load_from_memory(&data)
                .map_err(|e| CoreError::InvalidImage(e.to_string()))?;
            let input = preprocess(&decoded);

            Self::infer(&model, input).map_err(|e| CoreError::ClassifierError(e.to_string()))
        })
        .await
        .map_err(|e| CoreError::ClassifierError(format!("inference task failed: {}", e)))??;

        if logits.len() != self.labels.len() {
            return Err(CoreError::ClassifierError(format!(
                "model returned {} scores for {} labels",
                logits.len(),
                self.labels.len()
            )));
        }

        let probabilities = softmax(&logits);
        let (index, confidence) = top_class(&probabilities).ok_or_else(|| {
            CoreError::ClassifierError("model returned no scores".to_string())
        })?;

        Ok(Classification::new(self.labels[index].clone(), confidence))
    }
}

/// RGB, 224x224, scaled to [0, 1] and normalized with the ImageNet
/// statistics, laid out channel-first.
pub fn preprocess(source: &DynamicImage) -> Vec<f32> {
    let rgb = source.to_rgb8();
    let resized = image::imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    let plane = (INPUT_SIZE * INPUT_SIZE) as usize;
    let mut input = vec![0.0f32; 3 * plane];

    for (i, pixel) in resized.pixels().enumerate() {
        for channel in 0..3 {
            let value = pixel.0[channel] as f32 / 255.0;
            input[channel * plane + i] = (value - MEAN[channel]) / STD[channel];
        }
    }

    input
}

pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&logit| (logit - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

/// Index and value of the highest score; the first one wins on ties.
pub fn top_class(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;

    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best
}
