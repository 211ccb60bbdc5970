use serde::{Deserialize, Serialize};

/// Semantic color family attached to a category.
///
/// This is a name, not a color value; the UI resolves it through its own
/// lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Purple,
    Yellow,
    Red,
    Cyan,
    Pink,
    Indigo,
    Gray,
    Slate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_serialize_as_lowercase_family_names() {
        assert_eq!(serde_json::to_string(&ColorToken::Slate).unwrap(), "\"slate\"");
        let parsed: ColorToken = serde_json::from_str("\"purple\"").unwrap();
        assert_eq!(parsed, ColorToken::Purple);
        assert!(serde_json::from_str::<ColorToken>("\"orange\"").is_err());
    }
}
