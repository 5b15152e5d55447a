// Configuration type definitions

use serde::Deserialize;

fn default_true() -> bool {
    true
}

/// Review behavior configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    /// Highlight the target range in the document view
    #[serde(default = "default_true")]
    pub inline_decorations: bool,

    /// Write the file to disk after an accepted edit
    #[serde(default = "default_true")]
    pub auto_save: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        ReviewConfig {
            inline_decorations: true,
            auto_save: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub review: ReviewConfig,
}
