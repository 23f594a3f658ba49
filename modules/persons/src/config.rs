use serde::{Deserialize, Serialize};

/// Configuration for the persons module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonsConfig {
    /// Path prefix the person routes are mounted under.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for PersonsConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

impl PersonsConfig {
    /// Base path with a single leading slash and no trailing slash.
    pub fn normalized_base_path(&self) -> String {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            default_base_path()
        } else {
            format!("/{trimmed}")
        }
    }
}

fn default_base_path() -> String {
    "/person".to_string()
}
