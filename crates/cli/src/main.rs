//! `suiterun` -- sequential fail-fast script-suite runner.
//!
//! Reads an ordered manifest of script paths, invokes each one as a
//! subprocess (optionally with a TLS client key/cert flag pair), and
//! stops at the first non-zero exit. The pass/fail contract is printed
//! to stdout; diagnostics go to stderr via `tracing` so the two never
//! interleave.
//!
//! # Environment variables
//!
//! | Variable        | Required | Default              | Description                                  |
//! |-----------------|----------|----------------------|----------------------------------------------|
//! | `MANIFEST_PATH` | no       | `tests/scripts.list` | Manifest file, one script path per line      |
//! | `INTERPRETER`   | no       | `python`             | Invocation prefix for every entry            |
//! | `PROJECT_ROOT`  | no       | `.`                  | Exported to children as `PYTHONPATH`         |
//! | `CLIENT_KEY`    | no       | --                   | Key file passed as `-k` (needs `CLIENT_CERT`)|
//! | `CLIENT_CERT`   | no       | --                   | Cert file passed as `-c` (needs `CLIENT_KEY`)|

use suiterun_core::manifest::Manifest;
use suiterun_core::runner::{Runner, RunnerOptions, SuiteOutcome};

use suiterun_cli::config::{PROJECT_ROOT_VAR, Settings};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suiterun_cli=info,suiterun_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(2);
    });

    let manifest = match Manifest::load(&settings.manifest_path).await {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::error!(error = %e, "Cannot load manifest");
            std::process::exit(2);
        }
    };

    tracing::info!(
        manifest = %settings.manifest_path,
        entries = manifest.len(),
        interpreter = %settings.interpreter,
        authenticated = settings.credentials.is_some(),
        "Starting suite run",
    );

    let runner = Runner::new(RunnerOptions {
        interpreter: settings.interpreter,
        project_root_env: (PROJECT_ROOT_VAR.to_string(), settings.project_root),
        credentials: settings.credentials,
    });

    let mut stdout = std::io::stdout();
    match runner.run(&manifest, &mut stdout).await {
        Ok(SuiteOutcome::Passed { executed }) => {
            tracing::info!(executed, "Suite passed");
        }
        Ok(SuiteOutcome::Failed {
            entry, exit_code, ..
        }) => {
            tracing::error!(entry = %entry, ?exit_code, "Suite failed");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "Cannot write progress output");
            std::process::exit(2);
        }
    }
}
