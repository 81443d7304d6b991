use crate::error::ParseError;
use crate::types::{StepEntry, WorkflowDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Auto,
}

impl DocumentFormat {
    /// `.json` means JSON, everything else is treated as YAML.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub document: WorkflowDocument,
    pub format: DocumentFormat,
}

/// Either a full document or a bare list of steps.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Full(WorkflowDocument),
    Steps(Vec<StepEntry>),
}

impl From<DocumentRepr> for WorkflowDocument {
    fn from(repr: DocumentRepr) -> Self {
        match repr {
            DocumentRepr::Full(doc) => doc,
            DocumentRepr::Steps(steps) => WorkflowDocument {
                steps,
                ..Default::default()
            },
        }
    }
}

pub fn parse_document_str(input: &str, format: DocumentFormat) -> Result<ParsedDocument, ParseError> {
    match format {
        DocumentFormat::Json => Ok(ParsedDocument {
            document: serde_json::from_str::<DocumentRepr>(input)?.into(),
            format,
        }),
        DocumentFormat::Yaml => Ok(ParsedDocument {
            document: serde_yaml::from_str::<DocumentRepr>(input)?.into(),
            format,
        }),
        DocumentFormat::Auto => parse_document_auto(input),
    }
}

fn parse_document_auto(input: &str) -> Result<ParsedDocument, ParseError> {
    // JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str::<DocumentRepr>(input) {
            Ok(doc) => Ok(ParsedDocument {
                document: doc.into(),
                format: DocumentFormat::Json,
            }),
            // Flow-style YAML also starts with a bracket.
            Err(e) => match serde_yaml::from_str::<DocumentRepr>(input) {
                Ok(doc) => Ok(ParsedDocument {
                    document: doc.into(),
                    format: DocumentFormat::Yaml,
                }),
                Err(_) => Err(ParseError::Json(e)),
            },
        };
    }

    match serde_yaml::from_str::<DocumentRepr>(input) {
        Ok(doc) => Ok(ParsedDocument {
            document: doc.into(),
            format: DocumentFormat::Yaml,
        }),
        Err(e) => Err(ParseError::Yaml(e)),
    }
}

/// Render a document in the requested format. `Auto` renders YAML.
pub fn render_document(doc: &WorkflowDocument, format: DocumentFormat) -> Result<String, ParseError> {
    match format {
        DocumentFormat::Json => {
            let mut s = serde_json::to_string_pretty(doc)?;
            s.push('\n');
            Ok(s)
        }
        DocumentFormat::Yaml | DocumentFormat::Auto => Ok(serde_yaml::to_string(doc)?),
    }
}
