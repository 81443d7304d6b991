use crate::error::EditError;
use crate::presets::{PresetCatalog, PresetSelection};
use crate::types::{HttpMethod, RequestDescriptor};

/// Editable ordered list of steps. Steps are only appended or edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepList {
    steps: Vec<RequestDescriptor>,
}

impl StepList {
    /// A fresh list with one GET step pointing at the first preset.
    pub fn new(presets: &PresetCatalog) -> Self {
        Self {
            steps: vec![RequestDescriptor::get(1, presets.first())],
        }
    }

    pub fn from_descriptors(steps: Vec<RequestDescriptor>) -> Self {
        Self { steps }
    }

    pub fn as_slice(&self) -> &[RequestDescriptor] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RequestDescriptor> {
        self.steps.get(index)
    }

    /// Append a blank GET step and return its index.
    pub fn add(&mut self) -> usize {
        let id = self.steps.len() as u32 + 1;
        self.steps.push(RequestDescriptor::get(id, ""));
        self.steps.len() - 1
    }

    pub fn set_url(&mut self, index: usize, url: impl Into<String>) -> Result<(), EditError> {
        self.step_mut(index)?.url = url.into();
        Ok(())
    }

    pub fn set_method(&mut self, index: usize, method: HttpMethod) -> Result<(), EditError> {
        self.step_mut(index)?.method = method;
        Ok(())
    }

    pub fn set_body(&mut self, index: usize, body: impl Into<String>) -> Result<(), EditError> {
        self.step_mut(index)?.body = body.into();
        Ok(())
    }

    /// Apply a selection-control value: a preset URL, or blank for custom mode.
    pub fn select_preset(
        &mut self,
        presets: &PresetCatalog,
        index: usize,
        value: &str,
    ) -> Result<(), EditError> {
        let step = self.step_mut(index)?;
        match presets.select(value) {
            PresetSelection::Preset(url) => {
                step.url = url;
                step.is_custom_url = false;
            }
            PresetSelection::Custom => {
                step.url.clear();
                step.is_custom_url = true;
            }
        }
        Ok(())
    }

    /// Pick a preset by its catalog position.
    pub fn select_preset_index(
        &mut self,
        presets: &PresetCatalog,
        index: usize,
        preset: usize,
    ) -> Result<(), EditError> {
        let url = presets
            .get(preset)
            .ok_or(EditError::UnknownPreset {
                index: preset,
                len: presets.len(),
            })?
            .to_string();
        self.select_preset(presets, index, &url)
    }

    pub fn set_custom_url(&mut self, index: usize, custom: bool) -> Result<(), EditError> {
        self.step_mut(index)?.is_custom_url = custom;
        Ok(())
    }

    fn step_mut(&mut self, index: usize) -> Result<&mut RequestDescriptor, EditError> {
        let len = self.steps.len();
        self.steps
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { index, len })
    }
}

impl From<StepList> for Vec<RequestDescriptor> {
    fn from(list: StepList) -> Self {
        list.steps
    }
}
