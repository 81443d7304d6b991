use reqchain_core::RequestDescriptor;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Whether human-readable lines should be printed instead of a JSON document.
pub fn is_text(format: OutputFormat, quiet: bool) -> bool {
    format == OutputFormat::Text && !quiet
}

/// `text` pretty-prints, `json` writes one compact line.
pub fn print_result<T: Serialize>(format: OutputFormat, quiet: bool, result: &T) {
    if quiet {
        return;
    }
    let rendered = match format {
        OutputFormat::Text => serde_json::to_string_pretty(result),
        OutputFormat::Json => serde_json::to_string(result),
    };
    if let Ok(s) = rendered {
        println!("{s}");
    }
}

/// Header line followed by the step's response value.
pub fn print_step_value(step: &RequestDescriptor, value: &serde_json::Value) {
    println!("# step {} {} {}", step.id, step.method, step.url);
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

pub fn print_error(format: OutputFormat, quiet: bool, message: &str) {
    if quiet {
        return;
    }
    match format {
        OutputFormat::Text => eprintln!("error: {message}"),
        OutputFormat::Json => {
            let err = serde_json::json!({ "error": message });
            eprintln!("{err}");
        }
    }
}
