use leptos::*;

/// Headline metric with an icon. `value` is already formatted for display.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon">
                <i class=icon></i>
            </div>
            <div class="stat-content">
                <h3 class="stat-number">{move || value.get()}</h3>
                <p>{label}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SectionCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = if class.is_empty() {
        "section-card".to_string()
    } else {
        format!("section-card {class}")
    };
    view! {
        <section class=classes>
            <div class="section-header">
                <h2>{title}</h2>
            </div>
            {children()}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_shows_value_and_label() {
        let html = render_to_string(|| {
            view! {
                <StatCard
                    label="Utilization Rate"
                    icon="fas fa-chart-pie"
                    value=Signal::derive(|| "78%".to_string())
                />
            }
        });
        assert!(html.contains("stat-number"));
        assert!(html.contains("78%"));
        assert!(html.contains("Utilization Rate"));
    }

    #[test]
    fn section_card_merges_extra_class() {
        let html = render_to_string(|| {
            view! { <SectionCard title="Recent Activity" class="activity">"body"</SectionCard> }
        });
        assert!(html.contains("section-card activity"));
        assert!(html.contains("Recent Activity"));
    }
}
