//! HookCard: one catalog entry, animated in with a staggered delay.
//!
//! The appear animation is defined in `hooks.css` (`@keyframes card-appear`).

use crate::shared::category_style::badge_style;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::domain::a001_hook::Hook;
use contracts::domain::a002_category::CategoryInfo;
use leptos::prelude::*;
use thaw::{Badge as TagBadge, BadgeAppearance, BadgeColor, Card};

/// What the category badge shows for a hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBadgeModel {
    pub label: String,
    pub icon: Option<String>,
    pub variant: &'static str,
    pub style: String,
    pub description: Option<String>,
}

impl CategoryBadgeModel {
    /// Colored badge when the descriptor is known, neutral raw code otherwise
    pub fn for_hook(hook: &Hook, category: Option<&CategoryInfo>) -> Self {
        match category {
            Some(info) => Self {
                label: info.label.clone(),
                icon: info.icon.clone(),
                variant: "category",
                style: badge_style(info.color),
                description: Some(info.description.clone()),
            },
            None => Self {
                label: hook.category.code().to_string(),
                icon: None,
                variant: "neutral",
                style: String::new(),
                description: None,
            },
        }
    }
}

/// 1234 -> "1.2k"; values below 1000 stay as they are
pub fn format_stars(stars: u32) -> String {
    if stars < 1_000 {
        return stars.to_string();
    }
    let thousands = stars as f64 / 1_000.0;
    let text = format!("{:.1}", thousands);
    format!("{}k", text.trim_end_matches(".0"))
}

#[component]
pub fn HookCard(
    hook: Hook,
    /// Descriptor for `hook.category`, `None` when the lookup failed
    category: Option<CategoryInfo>,
    /// Appear animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let badge = CategoryBadgeModel::for_hook(&hook, category.as_ref());
    let card_style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    let Hook {
        name,
        description,
        long_description,
        tags,
        repo_url,
        author,
        author_url,
        stars,
        language,
        updated_at,
        featured,
        ..
    } = hook;

    let author_view = match author_url {
        Some(url) => view! {
            <a href=url target="_blank" rel="noopener noreferrer">{author}</a>
        }
        .into_any(),
        None => view! { <span>{author}</span> }.into_any(),
    };

    view! {
        <Card attr:style=card_style>
            <article class="hook-card">
                <div class="hook-card__header">
                    <h3 class="hook-card__name">{name}</h3>
                    {featured.then(|| view! {
                        <span class="hook-card__featured" title="Featured">"★ Featured"</span>
                    })}
                </div>

                <Badge variant=badge.variant style=badge.style title=badge.description>
                    {badge.icon.map(|glyph| view! { <span class="badge__icon">{glyph}</span> })}
                    {badge.label}
                </Badge>

                <p class="hook-card__description" title=long_description>{description}</p>

                {(!tags.is_empty()).then(|| view! {
                    <div class="hook-card__tags">
                        {tags
                            .into_iter()
                            .map(|tag| view! {
                                <TagBadge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                    {tag}
                                </TagBadge>
                            })
                            .collect_view()}
                    </div>
                })}

                <div class="hook-card__meta">
                    <span class="hook-card__author">{icon("user")}{author_view}</span>
                    {language.map(|lang| view! {
                        <span class="hook-card__language">{icon("code")}{lang}</span>
                    })}
                    {stars.map(|count| view! {
                        <span class="hook-card__stars" title=format!("{} stars", count)>
                            {icon("star")}{format_stars(count)}
                        </span>
                    })}
                    {updated_at.map(|date| view! {
                        <span class="hook-card__updated">"Updated " {date}</span>
                    })}
                </div>

                <a class="hook-card__link" href=repo_url target="_blank" rel="noopener noreferrer">
                    {icon("external-link")}
                    "View repository"
                </a>
            </article>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::get_category_info;
    use contracts::enums::HookCategory;

    fn hook(category: HookCategory) -> Hook {
        Hook::new("h", "Hook", "desc", category, "https://example.org/h", "me")
    }

    #[test]
    fn test_known_category_gets_colored_badge() {
        let hook = hook(HookCategory::Testing);
        let badge = CategoryBadgeModel::for_hook(&hook, get_category_info(hook.category));
        assert_eq!(badge.label, "Testing");
        assert_eq!(badge.variant, "category");
        assert!(badge.style.contains("background-color"));
    }

    #[test]
    fn test_missing_category_falls_back_to_neutral_badge() {
        let hook = hook(HookCategory::CiCd);
        let badge = CategoryBadgeModel::for_hook(&hook, None);
        assert_eq!(badge.label, "ci-cd");
        assert_eq!(badge.variant, "neutral");
        assert!(badge.style.is_empty());
        assert!(badge.icon.is_none());
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(0), "0");
        assert_eq!(format_stars(999), "999");
        assert_eq!(format_stars(1_000), "1k");
        assert_eq!(format_stars(1_240), "1.2k");
        assert_eq!(format_stars(12_960), "13k");
    }
}
