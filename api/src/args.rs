use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pantrycam_core::domain::common::{
    ClassifierConfig, ClassifierKind, CorpusConfig, LLMConfig, PantryConfig,
    RecommendationConfig, UploadConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantrycam", version, about = "Photo-driven recipe recommendations")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub uploads: UploadArgs,

    #[command(flatten)]
    pub recommendation: RecommendationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/pantrycam`. Empty serves from `/`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,

    /// Upper bound for a whole upload request, all files included.
    #[arg(
        long = "server-max-request-bytes",
        env = "SERVER_MAX_REQUEST_BYTES",
        default_value_t = 64 * 1024 * 1024
    )]
    pub max_request_bytes: usize,

    /// Directory holding the browser client, served for unmatched paths.
    #[arg(long = "server-web-root", env = "SERVER_WEB_ROOT")]
    pub web_root: Option<PathBuf>,

    #[arg(long = "disable-metrics", env = "DISABLE_METRICS")]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CorpusArgs {
    /// Newline-delimited JSON file, one recipe per line.
    #[arg(long = "recipes-path", env = "RECIPES_PATH", default_value = "recipes.json")]
    pub recipes_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassifierArg {
    Onnx,
    Gemini,
    FileName,
}

impl From<ClassifierArg> for ClassifierKind {
    fn from(value: ClassifierArg) -> Self {
        match value {
            ClassifierArg::Onnx => ClassifierKind::Onnx,
            ClassifierArg::Gemini => ClassifierKind::Gemini,
            ClassifierArg::FileName => ClassifierKind::FileName,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    #[arg(long = "classifier", env = "CLASSIFIER", value_enum, default_value_t = ClassifierArg::Onnx)]
    pub kind: ClassifierArg,

    #[arg(
        long = "model-path",
        env = "MODEL_PATH",
        default_value = "fruit_veg_classifier.onnx"
    )]
    pub model_path: PathBuf,

    /// One class name per line, in model output order.
    #[arg(long = "labels-path", env = "LABELS_PATH")]
    pub labels_path: Option<PathBuf>,

    #[arg(
        long = "confidence-threshold",
        env = "CONFIDENCE_THRESHOLD",
        default_value_t = 0.5,
        value_parser = parse_confidence_threshold
    )]
    pub confidence_threshold: f32,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UploadArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RecommendationArgs {
    #[arg(
        long = "top-n",
        env = "RECOMMEND_TOP_N",
        default_value_t = 5,
        value_parser = parse_top_n
    )]
    pub top_n: usize,

    /// File inside the upload directory shown for every recommended recipe.
    #[arg(long = "placeholder-image", env = "PLACEHOLDER_IMAGE", default_value = "placeholder.png")]
    pub placeholder_image: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

fn parse_top_n(value: &str) -> Result<usize, String> {
    let top_n = value.parse::<usize>().map_err(|e| e.to_string())?;
    if top_n == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(top_n)
}

fn parse_confidence_threshold(value: &str) -> Result<f32, String> {
    let threshold = value.parse::<f32>().map_err(|e| e.to_string())?;
    if !(0.0..=1.0).contains(&threshold) {
        return Err("must be between 0 and 1".to_string());
    }
    Ok(threshold)
}

impl From<Args> for PantryConfig {
    fn from(args: Args) -> Self {
        PantryConfig {
            corpus: CorpusConfig {
                path: args.corpus.recipes_path,
            },
            classifier: ClassifierConfig {
                kind: args.classifier.kind.into(),
                model_path: args.classifier.model_path,
                labels_path: args.classifier.labels_path,
                confidence_threshold: args.classifier.confidence_threshold,
                llm: LLMConfig {
                    gemini_api_key: args.classifier.gemini_api_key,
                    gemini_model: args.classifier.gemini_model,
                },
            },
            uploads: UploadConfig {
                directory: args.uploads.upload_dir,
                public_path: format!("{}/uploads", args.server.root_path),
            },
            recommendation: RecommendationConfig {
                top_n: args.recommendation.top_n,
                placeholder_image: args.recommendation.placeholder_image,
            },
        }
    }
}
