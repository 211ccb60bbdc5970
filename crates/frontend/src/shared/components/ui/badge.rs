use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "category", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Inline style, used for colors resolved at runtime
    #[prop(optional, into)]
    style: MaybeProp<String>,
    /// Native tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "category" => "badge--category",
        _ => "badge--neutral",
    };

    view! {
        <span
            class=move || format!("badge {}", variant_class())
            style=move || style.get().unwrap_or_default()
            title=move || title.get()
        >
            {children()}
        </span>
    }
}
