use crate::enums::HookCategory;
use serde::{Deserialize, Serialize};

/// One cataloged third-party hook.
///
/// Field names serialize in camelCase so the record matches the JSON shape a
/// remote catalog source would deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub category: HookCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub repo_url: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    // Opaque date strings, displayed as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Hook {
    /// Creates a record with the required fields; optional ones are added
    /// with the chained setters below.
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: HookCategory,
        repo_url: &str,
        author: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            long_description: None,
            category,
            tags: Vec::new(),
            repo_url: repo_url.to_string(),
            author: author.to_string(),
            author_url: None,
            stars: None,
            language: None,
            created_at: None,
            updated_at: None,
            featured: false,
        }
    }

    pub fn long_description(mut self, text: &str) -> Self {
        self.long_description = Some(text.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn author_url(mut self, url: &str) -> Self {
        self.author_url = Some(url.to_string());
        self
    }

    pub fn stars(mut self, stars: u32) -> Self {
        self.stars = Some(stars);
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn dates(mut self, created_at: &str, updated_at: &str) -> Self {
        self.created_at = Some(created_at.to_string());
        self.updated_at = Some(updated_at.to_string());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_when_absent() {
        let json = r#"{
            "id": "lint-on-edit",
            "name": "Lint on edit",
            "description": "Runs the linter after every edit",
            "category": "code-quality",
            "repoUrl": "https://example.org/lint-on-edit",
            "author": "someone"
        }"#;
        let hook: Hook = serde_json::from_str(json).unwrap();
        assert_eq!(hook.category, HookCategory::CodeQuality);
        assert!(hook.tags.is_empty());
        assert_eq!(hook.stars, None);
        assert!(!hook.featured);
    }

    #[test]
    fn test_unknown_category_fails_to_deserialize() {
        let json = r#"{
            "id": "x",
            "name": "x",
            "description": "x",
            "category": "deployment",
            "repoUrl": "https://example.org/x",
            "author": "x"
        }"#;
        assert!(serde_json::from_str::<Hook>(json).is_err());
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let hook = Hook::new("a", "A", "desc", HookCategory::Testing, "https://example.org/a", "me")
            .tags(&["pytest", "ci"])
            .stars(42)
            .language("Python")
            .featured();
        assert_eq!(hook.tags, vec!["pytest".to_string(), "ci".to_string()]);
        assert_eq!(hook.stars, Some(42));
        assert_eq!(hook.language.as_deref(), Some("Python"));
        assert!(hook.featured);

        let json = serde_json::to_value(&hook).unwrap();
        assert_eq!(json["repoUrl"], "https://example.org/a");
        assert!(json.get("authorUrl").is_none());
    }
}
