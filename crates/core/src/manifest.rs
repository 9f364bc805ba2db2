//! Manifest loading and parsing.
//!
//! A manifest is a flat text file naming one script per line, in the
//! order the scripts are to be executed. It is read once at startup and
//! immutable afterwards. Duplicate entries are allowed and run twice.

use std::path::Path;

use tokio::fs;

/// Error type for manifest loading.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The ordered list of script paths to execute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Parse manifest text into entries.
    ///
    /// Each line is one entry with trailing whitespace trimmed (this
    /// covers `\r\n` line endings and stray blanks before the newline).
    /// Empty lines are dropped; there is no comment syntax.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// Read and parse the manifest file at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await.map_err(|source| {
            let path = path.display().to_string();
            if source.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotFound(path)
            } else {
                ManifestError::Read { path, source }
            }
        })?;
        Ok(Self::parse(&contents))
    }

    /// Entries in execution order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest names no scripts at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
