use std::path::Path;

use reqchain_core::{render_document, DocumentFormat, PresetCatalog, StepList, WorkflowDocument};
use serde::Serialize;

use crate::exit_codes;
use crate::output::{is_text, print_error, print_result};
use crate::OutputArgs;

#[derive(Serialize)]
struct InitResult {
    path: String,
    format: String,
    url: String,
}

pub async fn init_cmd(path: &Path, preset: Option<usize>, force: bool, output: OutputArgs) -> i32 {
    if path.exists() && !force {
        print_error(
            output.format,
            output.quiet,
            &format!("{} already exists (use --force to overwrite)", path.display()),
        );
        return exit_codes::RUNTIME_ERROR;
    }

    let presets = PresetCatalog::default();
    let mut steps = StepList::new(&presets);
    if let Some(p) = preset {
        if let Err(e) = steps.select_preset_index(&presets, 0, p) {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::VALIDATION_FAILED;
        }
    }

    let format = DocumentFormat::from_path(path);
    let doc = WorkflowDocument::from_descriptors(steps.as_slice());
    let rendered = match render_document(&doc, format) {
        Ok(s) => s,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };

    if let Err(e) = std::fs::write(path, rendered) {
        print_error(
            output.format,
            output.quiet,
            &format!("failed to write {}: {e}", path.display()),
        );
        return exit_codes::RUNTIME_ERROR;
    }

    let result = InitResult {
        path: path.display().to_string(),
        format: format!("{format:?}"),
        url: doc.steps[0].url.clone(),
    };
    if is_text(output.format, output.quiet) {
        println!("wrote {} ({:?})", result.path, format);
    } else {
        print_result(output.format, output.quiet, &result);
    }
    exit_codes::SUCCESS
}
