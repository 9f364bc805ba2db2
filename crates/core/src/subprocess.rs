//! Subprocess spawning and exit-status collection.
//!
//! The runner never surfaces child output; stdout and stderr are
//! redirected to the null device and only the exit status is observed.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

/// Spawn `cmd` with stdout/stderr discarded and wait for it to exit.
///
/// stdin is left inherited. There is no timeout: the child is awaited
/// for as long as it runs. `kill_on_drop(true)` ensures a cancelled
/// runner does not leave the child behind.
pub async fn run_silenced(cmd: &mut Command) -> std::io::Result<ExitStatus> {
    cmd.stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    let mut child = cmd.spawn()?;
    child.wait().await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_temp_script;

    fn sh(script_path: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg(script_path);
        cmd
    }

    #[tokio::test]
    async fn zero_exit() {
        let script = write_temp_script("exit 0\n");
        let status = run_silenced(&mut sh(script.path().to_str().expect("path")))
            .await
            .expect("run");
        assert!(status.success());
    }

    #[tokio::test]
    async fn nonzero_exit_code_is_observed() {
        let script = write_temp_script("exit 7\n");
        let status = run_silenced(&mut sh(script.path().to_str().expect("path")))
            .await
            .expect("run");
        assert_eq!(status.code(), Some(7));
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let mut cmd = Command::new("/nonexistent/interpreter");
        let result = run_silenced(&mut cmd).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn child_output_is_discarded() {
        // A chatty script still succeeds; its output goes nowhere.
        let script = write_temp_script("echo noise; echo more-noise >&2; exit 0\n");
        let status = run_silenced(&mut sh(script.path().to_str().expect("path")))
            .await
            .expect("run");
        assert!(status.success());
    }
}
