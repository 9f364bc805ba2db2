//! Runner configuration loaded from environment variables.
//!
//! All fields have defaults suitable for running a suite from a
//! project checkout; override via environment variables (a `.env`
//! file is loaded by `main` before this runs).

use suiterun_core::command::Credentials;

/// Name of the variable exported to every invoked script so it can
/// resolve shared library code relative to the project root.
pub const PROJECT_ROOT_VAR: &str = "PYTHONPATH";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("CLIENT_KEY and CLIENT_CERT must be set together (only {0} is set)")]
    PartialCredentials(&'static str),
}

/// Runner settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Manifest file location (default: `tests/scripts.list`).
    pub manifest_path: String,
    /// Invocation prefix for every entry (default: `python`).
    pub interpreter: String,
    /// Project root exported to children as `PYTHONPATH` (default: `.`).
    pub project_root: String,
    /// TLS client credentials appended to every invocation; `None`
    /// unless both `CLIENT_KEY` and `CLIENT_CERT` are set.
    pub credentials: Option<Credentials>,
}

impl Settings {
    /// Load settings from environment variables with defaults.
    ///
    /// | Env Var        | Default              |
    /// |----------------|----------------------|
    /// | `MANIFEST_PATH`| `tests/scripts.list` |
    /// | `INTERPRETER`  | `python`             |
    /// | `PROJECT_ROOT` | `.`                  |
    /// | `CLIENT_KEY`   | unset                |
    /// | `CLIENT_CERT`  | unset                |
    pub fn from_env() -> Result<Self, SettingsError> {
        let manifest_path =
            std::env::var("MANIFEST_PATH").unwrap_or_else(|_| "tests/scripts.list".into());
        let interpreter = std::env::var("INTERPRETER").unwrap_or_else(|_| "python".into());
        let project_root = std::env::var("PROJECT_ROOT").unwrap_or_else(|_| ".".into());
        let credentials = credentials_from(
            std::env::var("CLIENT_KEY").ok(),
            std::env::var("CLIENT_CERT").ok(),
        )?;

        Ok(Self {
            manifest_path,
            interpreter,
            project_root,
            credentials,
        })
    }
}

/// Combine the optional key/cert variables into a credential pair.
///
/// Both set selects the authenticated variant; both unset selects the
/// plain variant; exactly one set is a configuration mistake and is
/// rejected rather than silently half-applied.
fn credentials_from(
    key: Option<String>,
    cert: Option<String>,
) -> Result<Option<Credentials>, SettingsError> {
    match (key, cert) {
        (Some(key_path), Some(cert_path)) => Ok(Some(Credentials {
            key_path,
            cert_path,
        })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(SettingsError::PartialCredentials("CLIENT_KEY")),
        (None, Some(_)) => Err(SettingsError::PartialCredentials("CLIENT_CERT")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
