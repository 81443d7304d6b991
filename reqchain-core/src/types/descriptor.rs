use crate::types::HttpMethod;

/// One configured step of a request chain.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RequestDescriptor {
    pub id: u32,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub method: HttpMethod,

    /// Raw JSON text. Only sent for POST; may be malformed.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,

    #[serde(default)]
    #[serde(rename = "isCustomUrl")]
    pub is_custom_url: bool,
}

impl RequestDescriptor {
    pub fn new(id: u32, url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            id,
            url: url.into(),
            method,
            body: String::new(),
            is_custom_url: false,
        }
    }

    pub fn get(id: u32, url: impl Into<String>) -> Self {
        Self::new(id, url, HttpMethod::Get)
    }

    pub fn post(id: u32, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::new(id, url, HttpMethod::Post)
        }
    }

    pub fn with_custom_url(mut self, custom: bool) -> Self {
        self.is_custom_url = custom;
        self
    }

    /// The body text that would be transmitted, if any.
    ///
    /// `None` for GET steps and for POST steps whose body is blank.
    pub fn payload_text(&self) -> Option<&str> {
        if self.method != HttpMethod::Post {
            return None;
        }
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
