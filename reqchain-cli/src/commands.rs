use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute steps in order, stopping at the first failure.
    Run {
        /// Step file (JSON or YAML).
        path: Option<PathBuf>,
        /// Extra step appended after the file's steps: "<METHOD> <URL> [BODY]" or just "<URL>".
        #[arg(long = "step", value_name = "STEP")]
        steps: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        exec: ExecArgs,
    },
    /// Check a step file without running it.
    Validate {
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the built-in demo endpoints.
    Presets {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write a fresh step file with one default step.
    Init {
        path: PathBuf,
        /// Preset index for the first step (see `reqchain presets`).
        #[arg(long)]
        preset: Option<usize>,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}
