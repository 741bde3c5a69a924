pub mod entities;
pub mod labels;
pub mod ports;
pub mod services;

pub use entities::*;
pub use ports::*;
