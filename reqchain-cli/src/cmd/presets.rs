use reqchain_core::PresetCatalog;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{is_text, print_result};
use crate::OutputArgs;

#[derive(Serialize)]
struct PresetInfo {
    index: usize,
    url: String,
}

#[derive(Serialize)]
struct PresetsResult {
    presets: Vec<PresetInfo>,
}

pub async fn presets_cmd(output: OutputArgs) -> i32 {
    let catalog = PresetCatalog::default();
    let result = PresetsResult {
        presets: catalog
            .urls()
            .iter()
            .enumerate()
            .map(|(index, url)| PresetInfo {
                index,
                url: url.clone(),
            })
            .collect(),
    };

    if is_text(output.format, output.quiet) {
        for p in &result.presets {
            println!("{:>3}  {}", p.index, p.url);
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }

    exit_codes::SUCCESS
}
