pub mod repository;

pub use repository::InMemoryRecipeRepository;
