use leptos::*;

#[component]
pub fn RecentReports(reports: Vec<(String, String)>, on_share: Callback<String>) -> impl IntoView {
    view! {
        <ul class="recent-reports">
            {reports
                .into_iter()
                .map(|(id, title)| {
                    view! {
                        <li class="report-item">
                            <span>{title}</span>
                            <button
                                type="button"
                                class="btn-small"
                                aria-label="Share"
                                on:click=move |_| on_share.call(id.clone())
                            >
                                <i class="fas fa-share-alt"></i>
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
