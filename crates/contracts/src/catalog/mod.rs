//! Bundled hook catalog.
//!
//! Both tables are built once on first access and never change afterwards.
//! Consumers only ever see shared slices.

mod categories;
pub mod filter;
mod hooks;
pub mod validation;

use crate::domain::a001_hook::Hook;
use crate::domain::a002_category::CategoryInfo;
use crate::enums::HookCategory;
use once_cell::sync::Lazy;

pub use filter::{filter_hooks, CategoryFilter};
pub use validation::{validate_catalog, CatalogError, CatalogSummary};

static CATEGORIES: Lazy<Vec<CategoryInfo>> = Lazy::new(categories::build);
static HOOKS: Lazy<Vec<Hook>> = Lazy::new(hooks::build);

/// Category descriptors in display order
pub fn categories() -> &'static [CategoryInfo] {
    &CATEGORIES
}

/// All cataloged hooks in catalog order
pub fn hooks() -> &'static [Hook] {
    &HOOKS
}

/// Descriptor for `id` in the bundled category table
pub fn get_category_info(id: HookCategory) -> Option<&'static CategoryInfo> {
    find_category(categories(), id)
}

/// Descriptor for `id` in an arbitrary table; `None` when the table has no entry
pub fn find_category(table: &[CategoryInfo], id: HookCategory) -> Option<&CategoryInfo> {
    table.iter().find(|info| info.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ColorToken;

    #[test]
    fn test_lookup_returns_matching_descriptor_for_every_category() {
        for info in categories() {
            let found = get_category_info(info.id).expect("descriptor present");
            assert_eq!(found.id, info.id);
        }
        for category in HookCategory::all() {
            assert_eq!(get_category_info(category).map(|i| i.id), Some(category));
        }
    }

    #[test]
    fn test_lookup_in_partial_table_returns_none() {
        let partial: Vec<CategoryInfo> = categories()
            .iter()
            .filter(|info| info.id != HookCategory::Testing)
            .cloned()
            .collect();
        assert!(find_category(&partial, HookCategory::Testing).is_none());
        assert!(find_category(&[], HookCategory::Other).is_none());
    }

    #[test]
    fn test_category_table_follows_declaration_order() {
        let ids: Vec<HookCategory> = categories().iter().map(|info| info.id).collect();
        assert_eq!(ids, HookCategory::all().to_vec());
    }

    #[test]
    fn test_descriptors_match_published_table() {
        let git = get_category_info(HookCategory::GitAutomation).expect("git-automation present");
        assert_eq!(git.label, "Git Automation");
        assert_eq!(git.description, "Commits, branches, PRs");
        assert_eq!(git.icon.as_deref(), Some("🔀"));
        assert_eq!(git.color, ColorToken::Purple);

        let colors: Vec<ColorToken> = categories().iter().map(|info| info.color).collect();
        assert_eq!(
            colors,
            vec![
                ColorToken::Blue,
                ColorToken::Purple,
                ColorToken::Green,
                ColorToken::Yellow,
                ColorToken::Red,
                ColorToken::Pink,
                ColorToken::Indigo,
                ColorToken::Cyan,
                ColorToken::Gray,
                ColorToken::Slate,
            ]
        );
        assert_eq!(
            get_category_info(HookCategory::Validation).and_then(|i| i.icon.as_deref()),
            Some("✅")
        );
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let summary = validate_catalog(categories(), hooks()).expect("bundled catalog is valid");
        assert_eq!(summary.category_count, 10);
        assert_eq!(summary.hook_count, hooks().len());
    }
}
