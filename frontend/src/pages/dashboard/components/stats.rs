use leptos::*;

use crate::{components::cards::StatCard, pages::dashboard::view_model::StatCounter};

fn display_value(counter: &StatCounter) -> String {
    format!("{}{}", counter.displayed, counter.stat.suffix)
}

#[component]
pub fn DashboardStats(stats: RwSignal<Vec<StatCounter>>) -> impl IntoView {
    let count = stats.with_untracked(Vec::len);
    view! {
        <div class="stats-grid">
            {(0..count)
                .filter_map(|index| {
                    let counter = stats.with_untracked(|list| list.get(index).cloned())?;
                    let value = Signal::derive(move || {
                        stats.with(|list| list.get(index).map(display_value).unwrap_or_default())
                    });
                    Some(view! {
                        <StatCard label=counter.stat.label icon=counter.stat.icon value=value/>
                    })
                })
                .collect_view()}
        </div>
    }
}
