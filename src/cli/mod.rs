//! Command Line Interface (CLI) layer for devtype.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the image normalizer and the
//! device-record generator. It wires user-provided options to the
//! library functionality exposed via `devtype::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
