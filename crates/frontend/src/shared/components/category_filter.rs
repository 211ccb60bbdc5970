use crate::shared::category_style::active_button_style;
use crate::shared::icons::icon;
use contracts::catalog::CategoryFilter;
use contracts::domain::a002_category::CategoryInfo;
use contracts::enums::ColorToken;
use leptos::prelude::*;

/// One button of the category filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: CategoryFilter,
    pub label: String,
    pub icon: Option<String>,
    /// `None` for the "all" option
    pub color: Option<ColorToken>,
    pub is_active: bool,
}

impl FilterOption {
    pub fn class(&self) -> &'static str {
        match (self.is_active, self.color) {
            (true, None) => "category-filter__option category-filter__option--active category-filter__option--all",
            (true, Some(_)) => "category-filter__option category-filter__option--active",
            (false, _) => "category-filter__option category-filter__option--muted",
        }
    }

    /// Solid fill for the selected category; empty for everything else
    pub fn style(&self) -> String {
        match (self.is_active, self.color) {
            (true, Some(color)) => active_button_style(color),
            _ => String::new(),
        }
    }
}

/// "All Hooks" first, then one option per category in table order
pub fn filter_options(categories: &[CategoryInfo], active: CategoryFilter) -> Vec<FilterOption> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(FilterOption {
        value: CategoryFilter::All,
        label: "All Hooks".to_string(),
        icon: None,
        color: None,
        is_active: active == CategoryFilter::All,
    });
    options.extend(categories.iter().map(|info| {
        let value = CategoryFilter::Category(info.id);
        FilterOption {
            value,
            label: info.label.clone(),
            icon: info.icon.clone(),
            color: Some(info.color),
            is_active: active == value,
        }
    }));
    options
}

/// CategoryFilterBar - stateless row of category buttons.
///
/// Clicking any button, including the active one, reports its value through
/// `on_change`.
#[component]
pub fn CategoryFilterBar(
    /// Category descriptors in display order
    categories: Vec<CategoryInfo>,

    /// Currently selected filter
    #[prop(into)]
    active: Signal<CategoryFilter>,

    /// Called with the clicked option's value
    on_change: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <nav class="category-filter" aria-label="Filter hooks by category">
            <span class="category-filter__title">
                {icon("filter")}
                "Categories"
            </span>
            <div class="category-filter__options">
                {move || {
                    filter_options(&categories, active.get())
                        .into_iter()
                        .map(|option| {
                            let value = option.value;
                            let class = option.class();
                            let style = option.style();
                            let pressed = if option.is_active { "true" } else { "false" };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    style=style
                                    aria-pressed=pressed
                                    title=value.code()
                                    on:click=move |_| on_change.run(value)
                                >
                                    {option.icon.map(|glyph| view! {
                                        <span class="category-filter__icon">{glyph}</span>
                                    })}
                                    <span>{option.label}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::categories;
    use contracts::enums::HookCategory;

    #[test]
    fn test_all_option_comes_first_and_table_order_is_kept() {
        let options = filter_options(categories(), CategoryFilter::All);
        assert_eq!(options.len(), categories().len() + 1);
        assert_eq!(options[0].value, CategoryFilter::All);
        assert_eq!(options[0].label, "All Hooks");
        for (option, info) in options[1..].iter().zip(categories()) {
            assert_eq!(option.value, CategoryFilter::Category(info.id));
            assert_eq!(option.label, info.label);
        }
    }

    #[test]
    fn test_exactly_one_option_is_active() {
        let active = CategoryFilter::Category(HookCategory::Testing);
        let options = filter_options(categories(), active);
        let active_options: Vec<&FilterOption> = options.iter().filter(|o| o.is_active).collect();
        assert_eq!(active_options.len(), 1);
        assert_eq!(active_options[0].value, active);
        assert!(!active_options[0].style().is_empty());
        assert!(options[0].class().contains("--muted"));
    }

    #[test]
    fn test_active_all_option_has_no_inline_color() {
        let options = filter_options(categories(), CategoryFilter::All);
        assert!(options[0].is_active);
        assert!(options[0].class().contains("--active"));
        assert_eq!(options[0].style(), "");
        assert!(options[1..].iter().all(|o| o.style().is_empty()));
    }
}
