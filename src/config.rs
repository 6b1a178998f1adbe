use std::path::{Path, PathBuf};

/// Storage engine configuration
///
/// Databases are directories directly under `root`; each table is
/// `<root>/<database>/<table>.<extension>`.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory holding one sub-directory per database
    pub root: PathBuf,

    /// File extension of table files (without the dot)
    pub extension: String,

    /// Write table files as indented JSON
    pub pretty: bool,
}

impl EngineConfig {
    /// Create a configuration rooted at `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: "json".to_string(),
            pretty: true,
        }
    }

    /// Set the table file extension
    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Toggle indented JSON output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extension.is_empty() {
            return Err("extension cannot be empty".to_string());
        }

        if self.extension.contains(['/', '\\', '.']) {
            return Err(format!("invalid extension '{}'", self.extension));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
