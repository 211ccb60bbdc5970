use crate::domain::a001_hook::Hook;
use crate::enums::HookCategory;

/// Hook records in catalog order
pub(super) fn build() -> Vec<Hook> {
    vec![
        Hook::new(
            "format-on-write",
            "Format on Write",
            "Runs the project formatter on every file the agent writes or edits.",
            HookCategory::CodeQuality,
            "https://github.com/hookshelf/format-on-write",
            "hookshelf",
        )
        .long_description(
            "Detects prettier, rustfmt, black or gofmt from the project files and \
             formats only the paths touched by the tool call.",
        )
        .tags(&["formatter", "prettier", "rustfmt", "black"])
        .author_url("https://github.com/hookshelf")
        .stars(412)
        .language("TypeScript")
        .dates("2025-07-02", "2025-09-18")
        .featured(),
        Hook::new(
            "lint-gate",
            "Lint Gate",
            "Feeds linter diagnostics back to the agent after each edit.",
            HookCategory::CodeQuality,
            "https://github.com/mkalnins/lint-gate",
            "Marta Kalnins",
        )
        .tags(&["eslint", "clippy", "ruff"])
        .stars(187)
        .language("Python")
        .dates("2025-07-20", "2025-08-30"),
        Hook::new(
            "auto-commit",
            "Auto Commit",
            "Creates a checkpoint commit with a generated message when a session stops.",
            HookCategory::GitAutomation,
            "https://github.com/devtrail/auto-commit",
            "devtrail",
        )
        .tags(&["git", "checkpoint"])
        .author_url("https://github.com/devtrail")
        .stars(265)
        .language("Shell")
        .dates("2025-06-28", "2025-09-02"),
        Hook::new(
            "branch-guard",
            "Branch Guard",
            "Refuses writes while the working tree is on a protected branch.",
            HookCategory::GitAutomation,
            "https://github.com/okwu/branch-guard",
            "Chidi Okwu",
        )
        .tags(&["git", "safety"])
        .stars(94)
        .language("Go"),
        Hook::new(
            "session-ledger",
            "Session Ledger",
            "Appends every tool call with timing and token usage to a JSONL ledger.",
            HookCategory::Monitoring,
            "https://github.com/ledgerworks/session-ledger",
            "ledgerworks",
        )
        .long_description(
            "Ships with a small viewer that summarizes cost per session and the \
             slowest tool invocations.",
        )
        .tags(&["logging", "cost", "jsonl"])
        .stars(338)
        .language("Rust")
        .dates("2025-07-11", "2025-10-01")
        .featured(),
        Hook::new(
            "desktop-ping",
            "Desktop Ping",
            "Native desktop notification when the agent is waiting for input.",
            HookCategory::Notifications,
            "https://github.com/anavarro/desktop-ping",
            "Ana Navarro",
        )
        .tags(&["macos", "linux", "notify-send"])
        .author_url("https://anavarro.dev")
        .stars(521)
        .language("Shell")
        .dates("2025-06-30", "2025-08-12"),
        Hook::new(
            "slack-relay",
            "Slack Relay",
            "Posts session summaries and permission prompts to a Slack channel.",
            HookCategory::Notifications,
            "https://github.com/hookshelf/slack-relay",
            "hookshelf",
        )
        .tags(&["slack", "webhook"])
        .stars(148)
        .language("TypeScript"),
        Hook::new(
            "command-firewall",
            "Command Firewall",
            "Blocks destructive shell commands before they run, with an allowlist.",
            HookCategory::Validation,
            "https://github.com/safebench/command-firewall",
            "safebench",
        )
        .long_description(
            "Matches commands against configurable patterns such as recursive \
             deletes, force pushes and credential reads, and explains the refusal \
             to the agent.",
        )
        .tags(&["security", "bash", "allowlist"])
        .stars(734)
        .language("Python")
        .dates("2025-07-05", "2025-09-27")
        .featured(),
        Hook::new(
            "secret-scan",
            "Secret Scan",
            "Rejects edits that would introduce API keys or private keys into the repo.",
            HookCategory::Validation,
            "https://github.com/safebench/secret-scan",
            "safebench",
        )
        .tags(&["security", "secrets"])
        .stars(302)
        .language("Go"),
        Hook::new(
            "affected-tests",
            "Affected Tests",
            "Runs only the test files related to the paths changed in the last edit.",
            HookCategory::Testing,
            "https://github.com/tlindqvist/affected-tests",
            "Tove Lindqvist",
        )
        .tags(&["pytest", "jest", "cargo-test"])
        .stars(219)
        .language("Python")
        .dates("2025-08-01", "2025-09-21"),
        Hook::new(
            "tdd-guard",
            "TDD Guard",
            "Stops implementation edits until a failing test exists for the change.",
            HookCategory::Testing,
            "https://github.com/redgreen/tdd-guard",
            "redgreen",
        )
        .tags(&["tdd", "vitest"])
        .author_url("https://github.com/redgreen")
        .stars(456)
        .language("TypeScript")
        .featured(),
        Hook::new(
            "coverage-diff",
            "Coverage Diff",
            "Reports coverage deltas for touched files when the session ends.",
            HookCategory::Testing,
            "https://github.com/hookshelf/coverage-diff",
            "hookshelf",
        )
        .tags(&["coverage"])
        .stars(77)
        .language("Rust"),
        Hook::new(
            "pipeline-preflight",
            "Pipeline Preflight",
            "Validates CI workflow files locally before the agent pushes them.",
            HookCategory::CiCd,
            "https://github.com/devtrail/pipeline-preflight",
            "devtrail",
        )
        .tags(&["github-actions", "yaml"])
        .stars(121)
        .language("Go"),
        Hook::new(
            "subagent-handoff",
            "Subagent Handoff",
            "Writes a shared handoff note whenever a subagent finishes its task.",
            HookCategory::MultiAgent,
            "https://github.com/relaylab/subagent-handoff",
            "relaylab",
        )
        .tags(&["subagents", "coordination"])
        .stars(168)
        .language("TypeScript")
        .dates("2025-08-14", "2025-10-03"),
        Hook::new(
            "context-primer",
            "Context Primer",
            "Loads the open issue, recent commits and TODO list into a new session.",
            HookCategory::Workflow,
            "https://github.com/jbrandt/context-primer",
            "Jonas Brandt",
        )
        .tags(&["session-start", "context"])
        .stars(243)
        .language("Shell"),
    ]
}
