use serde::{Deserialize, Serialize};

/// Fixed classification buckets for cataloged hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookCategory {
    CodeQuality,
    GitAutomation,
    Monitoring,
    Notifications,
    Validation,
    Testing,
    CiCd,
    MultiAgent,
    Workflow,
    Other,
}

impl HookCategory {
    /// Stable identifier, identical to the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            HookCategory::CodeQuality => "code-quality",
            HookCategory::GitAutomation => "git-automation",
            HookCategory::Monitoring => "monitoring",
            HookCategory::Notifications => "notifications",
            HookCategory::Validation => "validation",
            HookCategory::Testing => "testing",
            HookCategory::CiCd => "ci-cd",
            HookCategory::MultiAgent => "multi-agent",
            HookCategory::Workflow => "workflow",
            HookCategory::Other => "other",
        }
    }

    /// All categories in declaration order
    pub fn all() -> [HookCategory; 10] {
        [
            HookCategory::CodeQuality,
            HookCategory::GitAutomation,
            HookCategory::Monitoring,
            HookCategory::Notifications,
            HookCategory::Validation,
            HookCategory::Testing,
            HookCategory::CiCd,
            HookCategory::MultiAgent,
            HookCategory::Workflow,
            HookCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "code-quality" => Some(HookCategory::CodeQuality),
            "git-automation" => Some(HookCategory::GitAutomation),
            "monitoring" => Some(HookCategory::Monitoring),
            "notifications" => Some(HookCategory::Notifications),
            "validation" => Some(HookCategory::Validation),
            "testing" => Some(HookCategory::Testing),
            "ci-cd" => Some(HookCategory::CiCd),
            "multi-agent" => Some(HookCategory::MultiAgent),
            "workflow" => Some(HookCategory::Workflow),
            "other" => Some(HookCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for HookCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trips_for_every_category() {
        for category in HookCategory::all() {
            assert_eq!(HookCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(HookCategory::from_code("deployment"), None);
        assert_eq!(HookCategory::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_kebab_codes() {
        let json = serde_json::to_string(&HookCategory::CiCd).unwrap();
        assert_eq!(json, "\"ci-cd\"");
        let parsed: HookCategory = serde_json::from_str("\"multi-agent\"").unwrap();
        assert_eq!(parsed, HookCategory::MultiAgent);
    }
}
