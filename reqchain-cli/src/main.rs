use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod logging;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "reqchain", version, about = "Run ordered chains of HTTP requests")]
struct Cli {
    /// Log debug output to stderr (overridden by REQCHAIN_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Run {
            path,
            steps,
            output,
            exec,
        } => cmd::run::run_cmd(path.as_deref(), &steps, output, exec).await,
        Command::Validate { path, output } => cmd::validate::validate_cmd(&path, output).await,
        Command::Presets { output } => cmd::presets::presets_cmd(output).await,
        Command::Init {
            path,
            preset,
            force,
            output,
        } => cmd::init::init_cmd(&path, preset, force, output).await,
    }
}
