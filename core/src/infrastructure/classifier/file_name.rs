use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Classification, NOT_INGREDIENT_CLASS, UploadedImage},
        ports::IngredientClassifier,
    },
};

/// Development classifier: reads the label from the uploaded file name,
/// e.g. `red_onion-2.jpg` is an onion. Needs no model weights.
#[derive(Debug, Clone)]
pub struct FileNameClassifier {
    labels: Vec<String>,
}

impl FileNameClassifier {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Longest known label contained in the file name wins, so
    /// "sweetpotato" is not reported as "potato".
    pub fn guess(&self, file_name: &str) -> Option<&str> {
        let haystack = file_name.to_lowercase().replace(['_', '-'], " ");

        self.labels
            .iter()
            .filter(|label| !label.eq_ignore_ascii_case(NOT_INGREDIENT_CLASS))
            .filter(|label| haystack.contains(&label.to_lowercase()))
            .max_by_key(|label| label.len())
            .map(String::as_str)
    }
}

impl IngredientClassifier for FileNameClassifier {
    fn name(&self) -> &'static str {
        "file-name"
    }

    async fn classify(&self, image: &UploadedImage) -> Result<Classification, CoreError> {
        let classification = match self.guess(&image.file_name) {
            Some(label) => Classification::new(label, 1.0),
            None => Classification::new(NOT_INGREDIENT_CLASS, 0.0),
        };

        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::ingredient::labels::default_labels;

    #[test]
    fn test_guess_prefers_longest_label() {
        let classifier = FileNameClassifier::new(default_labels());

        assert_eq!(classifier.guess("SweetPotato_01.jpg"), Some("sweetpotato"));
        assert_eq!(classifier.guess("bell-pepper.png"), Some("bell pepper"));
        assert_eq!(classifier.guess("IMG_0042.jpg"), None);
    }

    #[tokio::test]
    async fn test_unknown_file_is_not_ingredient() {
        let classifier = FileNameClassifier::new(default_labels());
        let image = UploadedImage::new("holiday.jpg", None, Bytes::from_static(b"jpg"));

        let classification = classifier.classify(&image).await.unwrap();

        assert_eq!(classification, Classification::new(NOT_INGREDIENT_CLASS, 0.0));
    }
}
