//! Child command construction.
//!
//! Builds each invocation as a discrete argument vector (never a shell
//! string), so script paths and credential paths need no quoting. The
//! equivalent human-readable command line is rendered separately for
//! failure diagnostics.

use tokio::process::Command;

/// Flag passed before the private key path.
const KEY_FLAG: &str = "-k";

/// Flag passed before the certificate path.
const CERT_FLAG: &str = "-c";

/// TLS client credential pair appended to every invocation in the
/// authenticated variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key_path: String,
    pub cert_path: String,
}

/// One script invocation: interpreter, script path, the project-root
/// environment variable exported to the child, and optional credentials.
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    interpreter: &'a str,
    script: &'a str,
    env: (&'a str, &'a str),
    credentials: Option<&'a Credentials>,
}

impl<'a> Invocation<'a> {
    pub fn new(
        interpreter: &'a str,
        script: &'a str,
        env: (&'a str, &'a str),
        credentials: Option<&'a Credentials>,
    ) -> Self {
        Self {
            interpreter,
            script,
            env,
            credentials,
        }
    }

    /// Build the child command: `<interpreter> <script> [-k <key> -c <cert>]`
    /// with the project-root variable set in the child's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.interpreter);
        cmd.arg(self.script);
        if let Some(creds) = self.credentials {
            cmd.args([KEY_FLAG, &creds.key_path, CERT_FLAG, &creds.cert_path]);
        }
        cmd.env(self.env.0, self.env.1);
        cmd
    }

    /// Render the command line echoed verbatim when the invocation
    /// fails, in a shape a user can paste into a shell to reproduce:
    /// `NAME=VALUE <interpreter> <script> [-k <key> -c <cert>]`.
    pub fn display_line(&self) -> String {
        let mut line = format!(
            "{}={} {} {}",
            self.env.0, self.env.1, self.interpreter, self.script
        );
        if let Some(creds) = self.credentials {
            line.push_str(&format!(
                " {} {} {} {}",
                KEY_FLAG, creds.key_path, CERT_FLAG, creds.cert_path
            ));
        }
        line
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
