pub mod editing;
pub mod error;
pub mod models;
pub mod render;
pub mod storage;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{composer::*, controller::*, store::*};
pub use error::ComposerError;
pub use models::{block::*, template::*};
pub use storage::*;
