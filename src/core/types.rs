use serde::{Deserialize, Serialize};

/// Options forwarded to the template renderer. The recognized fields are
/// defined by the renderer in use; this crate does not interpret them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    pub autoescape: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { autoescape: true }
    }
}
