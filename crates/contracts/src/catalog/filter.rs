use crate::domain::a001_hook::Hook;
use crate::enums::HookCategory;
use serde::{Deserialize, Serialize};

/// Active category selection: every hook, or only one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(HookCategory),
}

impl CategoryFilter {
    pub const ALL_CODE: &'static str = "all";

    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_CODE,
            CategoryFilter::Category(category) => category.code(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == Self::ALL_CODE {
            return Some(CategoryFilter::All);
        }
        HookCategory::from_code(code).map(CategoryFilter::Category)
    }

    pub fn matches(&self, hook: &Hook) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => hook.category == *category,
        }
    }
}

impl From<HookCategory> for CategoryFilter {
    fn from(category: HookCategory) -> Self {
        CategoryFilter::Category(category)
    }
}

/// Stable filter over `hooks`; relative order is preserved and `All` returns
/// the input unchanged.
pub fn filter_hooks(hooks: &[Hook], filter: CategoryFilter) -> Vec<Hook> {
    match filter {
        CategoryFilter::All => hooks.to_vec(),
        CategoryFilter::Category(_) => hooks.iter().filter(|h| filter.matches(h)).cloned().collect(),
    }
}
