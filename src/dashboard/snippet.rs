use serde::{Deserialize, Serialize};

pub const DEFAULT_API_SNIPPET: &str = "curl https://api.example.com/v1/wallets";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub code: String,
}

impl CodeSnippet {
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: None,
            code: code.into(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn api_request() -> Self {
        Self::new("API request", DEFAULT_API_SNIPPET).with_language("bash")
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.code.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_snippet() {
        let snippet = CodeSnippet::api_request();
        assert_eq!(snippet.code, DEFAULT_API_SNIPPET);
        assert_eq!(snippet.language.as_deref(), Some("bash"));
    }

    #[test]
    fn test_lines() {
        let snippet = CodeSnippet::new("multi", "line one\nline two");
        assert_eq!(snippet.lines().collect::<Vec<_>>(), vec!["line one", "line two"]);
    }
}
