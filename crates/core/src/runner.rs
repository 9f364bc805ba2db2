//! Sequential fail-fast suite runner.
//!
//! Executes every manifest entry in order, one child at a time, each
//! fully awaited before the next starts. The first entry that does not
//! exit zero aborts the whole run. Progress is written to the caller's
//! writer as plain text, one line per event:
//!
//! ```text
//! <entry>...
//! <entry>...done
//! ```
//!
//! followed by a final `PASS`, or on the first failure:
//!
//! ```text
//! FAIL!
//! <the attempted command line>
//! ```

use std::io::Write;

use crate::command::{Credentials, Invocation};
use crate::manifest::Manifest;
use crate::subprocess;

/// Options controlling how each manifest entry is invoked.
///
/// Explicit values rather than process-wide globals, so a run is fully
/// described by its options, its manifest, and its writer.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Invocation prefix every entry is run under, e.g. `python`.
    pub interpreter: String,
    /// Environment variable `(name, value)` exported to every child so
    /// invoked scripts can resolve shared code relative to the project
    /// root, e.g. `("PYTHONPATH", ".")`.
    pub project_root_env: (String, String),
    /// TLS client credentials appended to every invocation, or `None`
    /// for the plain variant.
    pub credentials: Option<Credentials>,
}

/// Terminal result of a suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteOutcome {
    /// Every entry exited zero.
    Passed {
        /// Number of entries executed (zero for an empty manifest).
        executed: usize,
    },
    /// An entry failed; later entries were never invoked.
    Failed {
        /// The manifest entry that failed.
        entry: String,
        /// The command line that was attempted, as echoed to the writer.
        command_line: String,
        /// The child's exit code, or `None` if it was killed by a
        /// signal or could not be spawned at all.
        exit_code: Option<i32>,
    },
}

/// The sequential script runner.
pub struct Runner {
    options: RunnerOptions,
}

impl Runner {
    pub fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    /// Run every entry of `manifest` in order, writing progress to `out`.
    ///
    /// A non-zero exit, a signal death, and a spawn failure (e.g. the
    /// script path does not exist) all take the same failure path: the
    /// run stops immediately and the attempted command line is echoed
    /// for diagnosis. The only `Err` this returns is a write failure
    /// on `out`; child failures are reported as [`SuiteOutcome::Failed`].
    pub async fn run<W: Write>(
        &self,
        manifest: &Manifest,
        out: &mut W,
    ) -> std::io::Result<SuiteOutcome> {
        for entry in manifest.entries() {
            // Announce before spawning, and flush so the line is
            // visible while the child runs.
            writeln!(out, "{entry}...")?;
            out.flush()?;

            let invocation = Invocation::new(
                &self.options.interpreter,
                entry,
                (
                    &self.options.project_root_env.0,
                    &self.options.project_root_env.1,
                ),
                self.options.credentials.as_ref(),
            );

            let status = subprocess::run_silenced(&mut invocation.command()).await;

            match status {
                Ok(status) if status.success() => {
                    writeln!(out, "{entry}...done")?;
                }
                outcome => {
                    let exit_code = outcome.ok().and_then(|status| status.code());
                    let command_line = invocation.display_line();
                    writeln!(out, "FAIL!")?;
                    writeln!(out, "{command_line}")?;
                    out.flush()?;
                    return Ok(SuiteOutcome::Failed {
                        entry: entry.clone(),
                        command_line,
                        exit_code,
                    });
                }
            }
        }

        writeln!(out, "PASS")?;
        out.flush()?;
        Ok(SuiteOutcome::Passed {
            executed: manifest.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
