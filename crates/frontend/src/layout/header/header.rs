use leptos::prelude::*;

/// Static page header with catalog totals
#[component]
pub fn Header(hook_count: usize, category_count: usize) -> impl IntoView {
    let totals = format!("{} hooks in {} categories", hook_count, category_count);

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <h1 class="header__title">"Hook Directory"</h1>
                <p class="header__tagline">
                    "Community hooks that format, guard, test and report on what your coding agent does."
                </p>
            </div>
            <div class="header__actions">
                <span class="header__totals">{totals}</span>
            </div>
        </header>
    }
}
