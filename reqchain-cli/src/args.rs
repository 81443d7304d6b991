use clap::Args;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EventsMode {
    None,
    Stdout,
    Log,
}

#[derive(Debug, Args, Clone)]
pub struct ExecArgs {
    /// Where run lifecycle events go.
    #[arg(long, value_enum, default_value_t = EventsMode::None)]
    pub events: EventsMode,
    /// Per-request timeout in milliseconds. Without it requests wait indefinitely.
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,
}
