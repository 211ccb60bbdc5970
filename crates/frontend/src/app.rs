use crate::domain::a001_hook::ui::list::HookDirectoryPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <HookDirectoryPage />
    }
}
