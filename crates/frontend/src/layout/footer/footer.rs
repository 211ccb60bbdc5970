use crate::shared::icons::icon;
use leptos::prelude::*;

pub const DOCS_URL: &str = "https://github.com/hookshelf/hook-directory/blob/main/docs/writing-hooks.md";
pub const CONTRIBUTE_URL: &str = "https://github.com/hookshelf/hook-directory";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <span class="footer__note">"Hooks are maintained by their authors. Review a hook before installing it."</span>
            <nav class="footer__links">
                <a class="footer__link" href=DOCS_URL target="_blank" rel="noopener noreferrer">
                    {icon("book")}
                    "Hook documentation"
                </a>
                <a class="footer__link" href=CONTRIBUTE_URL target="_blank" rel="noopener noreferrer">
                    {icon("git-pull-request")}
                    "Submit a hook"
                </a>
            </nav>
        </footer>
    }
}
