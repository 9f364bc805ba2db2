//! `suiterun` binary support library.
//!
//! Holds the environment-variable configuration layer; the runner
//! itself lives in `suiterun-core`.

pub mod config;
