//! Known-good demo endpoints offered when picking a step URL.

/// Public demo APIs that answer without credentials.
pub const DEFAULT_PRESETS: &[&str] = &[
    "https://jsonplaceholder.typicode.com/posts",
    "https://jsonplaceholder.typicode.com/comments",
    "https://jsonplaceholder.typicode.com/albums",
    "https://jsonplaceholder.typicode.com/photos",
    "https://jsonplaceholder.typicode.com/todos",
    "https://jsonplaceholder.typicode.com/users",
    "https://reqres.in/api/users",
    "https://catfact.ninja/fact",
    "https://dog.ceo/api/breeds/image/random",
];

/// Ordered list of preset URLs. The blank selection means "custom URL".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    urls: Vec<String>,
}

/// What a selection control resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetSelection {
    Preset(String),
    Custom,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_PRESETS.iter().map(|s| s.to_string()))
    }
}

impl PresetCatalog {
    pub fn new(urls: impl IntoIterator<Item = String>) -> Self {
        Self {
            urls: urls
                .into_iter()
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect(),
        }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    /// URL for a freshly created step list; empty when the catalog is empty.
    pub fn first(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    /// Interpret a raw selection value: blank switches to custom mode.
    pub fn select(&self, value: &str) -> PresetSelection {
        if value.is_empty() {
            PresetSelection::Custom
        } else {
            PresetSelection::Preset(value.to_string())
        }
    }
}
