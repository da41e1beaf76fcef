//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default listing page size.
const fn default_per_page() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for `list` output.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}
