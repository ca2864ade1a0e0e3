use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    let icon = icon.unwrap_or_else(|| "fas fa-inbox".to_string());
    view! {
        <div class="empty-state">
            <i class=icon aria-hidden="true"></i>
            <h3>{title}</h3>
            {description.map(|desc| view! { <p>{desc}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn falls_back_to_inbox_icon() {
        let html = render_to_string(|| {
            view! { <EmptyState title="No bookings" description="Nothing matches."/> }
        });
        assert!(html.contains("fas fa-inbox"));
        assert!(html.contains("No bookings"));
        assert!(html.contains("Nothing matches."));
    }
}
