pub mod classifier;
pub mod image_store;
pub mod recipe;
