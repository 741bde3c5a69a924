pub mod common;
pub mod health;
pub mod ingredient;
pub mod recipe;
