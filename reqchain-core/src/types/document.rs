use crate::types::{HttpMethod, RequestDescriptor};

/// A step file as stored on disk.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct WorkflowDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub steps: Vec<StepEntry>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StepEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub method: HttpMethod,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    #[serde(rename = "isCustomUrl")]
    pub is_custom_url: bool,
}

impl WorkflowDocument {
    /// Materialize descriptors; steps without an id get their 1-based position.
    pub fn descriptors(&self) -> Vec<RequestDescriptor> {
        self.steps
            .iter()
            .enumerate()
            .map(|(idx, s)| RequestDescriptor {
                id: s.id.unwrap_or(idx as u32 + 1),
                url: s.url.clone(),
                method: s.method,
                body: s.body.clone(),
                is_custom_url: s.is_custom_url,
            })
            .collect()
    }

    pub fn from_descriptors(descriptors: &[RequestDescriptor]) -> Self {
        Self {
            name: None,
            description: None,
            steps: descriptors
                .iter()
                .map(|d| StepEntry {
                    id: Some(d.id),
                    url: d.url.clone(),
                    method: d.method,
                    body: d.body.clone(),
                    is_custom_url: d.is_custom_url,
                })
                .collect(),
        }
    }
}
