use crate::domain::a002_category::CategoryInfo;
use crate::enums::{ColorToken, HookCategory};

/// Category descriptors in display order
pub(super) fn build() -> Vec<CategoryInfo> {
    vec![
        CategoryInfo::new(
            HookCategory::CodeQuality,
            "Code Quality",
            "Linting, formatting, style checks",
            Some("✨"),
            ColorToken::Blue,
        ),
        CategoryInfo::new(
            HookCategory::GitAutomation,
            "Git Automation",
            "Commits, branches, PRs",
            Some("🔀"),
            ColorToken::Purple,
        ),
        CategoryInfo::new(
            HookCategory::Monitoring,
            "Monitoring",
            "Logging, observability, analytics",
            Some("📊"),
            ColorToken::Green,
        ),
        CategoryInfo::new(
            HookCategory::Notifications,
            "Notifications",
            "Slack, Discord, email alerts",
            Some("🔔"),
            ColorToken::Yellow,
        ),
        CategoryInfo::new(
            HookCategory::Validation,
            "Validation",
            "Input validation, permissions",
            Some("✅"),
            ColorToken::Red,
        ),
        CategoryInfo::new(
            HookCategory::Testing,
            "Testing",
            "Running tests, coverage",
            Some("🧪"),
            ColorToken::Pink,
        ),
        CategoryInfo::new(
            HookCategory::CiCd,
            "CI/CD",
            "Build, deploy, automation",
            Some("🚀"),
            ColorToken::Indigo,
        ),
        CategoryInfo::new(
            HookCategory::MultiAgent,
            "Multi-Agent",
            "Multi-agent coordination",
            Some("🤖"),
            ColorToken::Cyan,
        ),
        CategoryInfo::new(
            HookCategory::Workflow,
            "Workflow",
            "General workflow automation",
            Some("⚡"),
            ColorToken::Gray,
        ),
        CategoryInfo::new(
            HookCategory::Other,
            "Other",
            "Miscellaneous",
            Some("📦"),
            ColorToken::Slate,
        ),
    ]
}
