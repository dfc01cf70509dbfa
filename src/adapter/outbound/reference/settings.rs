//! Reference book configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// `[reference]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// JSON snapshot of the reference book's posted lines. Relative paths
    /// resolve against the working directory.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}
