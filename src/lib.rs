pub mod catalog;
pub mod collection;
pub mod error;
pub mod generator;
pub mod logger;
pub mod variable;

// Re-export commonly used types
pub use error::{PostgenError, Result};
