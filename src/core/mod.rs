pub mod engine;
pub mod error;
pub mod types;

pub use engine::{FileTextUtils, FileTextUtilsBuilder};
pub use error::{FileTextError, Result};
pub use types::RenderOptions;
