use crate::enums::{ColorToken, HookCategory};
use serde::{Deserialize, Serialize};

/// Display descriptor for one [`HookCategory`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: HookCategory,
    pub label: String,
    pub description: String,
    /// Short glyph shown next to the label (usually an emoji)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub color: ColorToken,
}

impl CategoryInfo {
    pub fn new(
        id: HookCategory,
        label: &str,
        description: &str,
        icon: Option<&str>,
        color: ColorToken,
    ) -> Self {
        Self {
            id,
            label: label.to_string(),
            description: description.to_string(),
            icon: icon.map(str::to_string),
            color,
        }
    }
}
