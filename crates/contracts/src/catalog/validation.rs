use crate::domain::a001_hook::Hook;
use crate::domain::a002_category::CategoryInfo;
use crate::enums::HookCategory;
use std::collections::HashSet;
use thiserror::Error;

/// Authoring mistakes in the catalog tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("category `{0}` has no descriptor")]
    MissingCategory(HookCategory),
    #[error("category `{0}` is described more than once")]
    DuplicateCategory(HookCategory),
    #[error("hook id `{0}` is used more than once")]
    DuplicateHookId(String),
    #[error("hook `{id}` has an empty `{field}`")]
    EmptyField { id: String, field: &'static str },
}

/// Counts reported for a valid catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub hook_count: usize,
    pub category_count: usize,
    /// Hooks per category, in category table order
    pub per_category: Vec<(HookCategory, usize)>,
}

/// Checks the catalog invariants and stops at the first violation
pub fn validate_catalog(
    categories: &[CategoryInfo],
    hooks: &[Hook],
) -> Result<CatalogSummary, CatalogError> {
    let mut described = HashSet::new();
    for info in categories {
        if !described.insert(info.id) {
            return Err(CatalogError::DuplicateCategory(info.id));
        }
    }
    if let Some(missing) = HookCategory::all().into_iter().find(|c| !described.contains(c)) {
        return Err(CatalogError::MissingCategory(missing));
    }

    let mut seen_ids = HashSet::new();
    for hook in hooks {
        if hook.id.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                id: hook.id.clone(),
                field: "id",
            });
        }
        if !seen_ids.insert(hook.id.as_str()) {
            return Err(CatalogError::DuplicateHookId(hook.id.clone()));
        }
        for (field, value) in [("name", &hook.name), ("repoUrl", &hook.repo_url)] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: hook.id.clone(),
                    field,
                });
            }
        }
    }

    let per_category = categories
        .iter()
        .map(|info| (info.id, hooks.iter().filter(|h| h.category == info.id).count()))
        .collect();

    Ok(CatalogSummary {
        hook_count: hooks.len(),
        category_count: categories.len(),
        per_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ColorToken;

    fn full_table() -> Vec<CategoryInfo> {
        HookCategory::all()
            .into_iter()
            .map(|c| CategoryInfo::new(c, c.code(), "", None, ColorToken::Gray))
            .collect()
    }

    fn hook(id: &str, category: HookCategory) -> Hook {
        Hook::new(id, "name", "desc", category, "https://example.org/r", "author")
    }

    #[test]
    fn test_summary_counts_per_category() {
        let hooks = vec![
            hook("a", HookCategory::Testing),
            hook("b", HookCategory::Testing),
            hook("c", HookCategory::Workflow),
        ];
        let summary = validate_catalog(&full_table(), &hooks).unwrap();
        assert_eq!(summary.hook_count, 3);
        assert_eq!(summary.category_count, 10);
        assert!(summary.per_category.contains(&(HookCategory::Testing, 2)));
        assert!(summary.per_category.contains(&(HookCategory::Other, 0)));
        assert_eq!(summary.per_category[0].0, HookCategory::CodeQuality);
    }

    #[test]
    fn test_duplicate_hook_id_is_reported() {
        let hooks = vec![hook("a", HookCategory::Testing), hook("a", HookCategory::Other)];
        assert_eq!(
            validate_catalog(&full_table(), &hooks),
            Err(CatalogError::DuplicateHookId("a".into()))
        );
    }

    #[test]
    fn test_missing_descriptor_is_reported() {
        let table: Vec<CategoryInfo> = full_table()
            .into_iter()
            .filter(|i| i.id != HookCategory::CiCd)
            .collect();
        assert_eq!(
            validate_catalog(&table, &[]),
            Err(CatalogError::MissingCategory(HookCategory::CiCd))
        );
    }

    #[test]
    fn test_duplicate_descriptor_is_reported() {
        let mut table = full_table();
        table.push(CategoryInfo::new(HookCategory::Monitoring, "Again", "", None, ColorToken::Red));
        assert_eq!(
            validate_catalog(&table, &[]),
            Err(CatalogError::DuplicateCategory(HookCategory::Monitoring))
        );
    }

    #[test]
    fn test_empty_repo_url_is_reported() {
        let mut broken = hook("a", HookCategory::Testing);
        broken.repo_url = "  ".into();
        let err = validate_catalog(&full_table(), &[broken]).unwrap_err();
        assert_eq!(err.to_string(), "hook `a` has an empty `repoUrl`");
    }
}
