pub mod error;
pub mod model;
pub mod processing;

pub use error::*;
pub use model::document::*;
pub use processing::config::*;
pub use processing::traits::*;
pub use processing::types::*;
