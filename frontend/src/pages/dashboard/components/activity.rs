use leptos::*;
use std::collections::VecDeque;

use crate::model::ActivityEntry;

#[component]
pub fn ActivityItem(entry: ActivityEntry) -> impl IntoView {
    view! {
        <div class="activity-item">
            <div class="activity-icon">
                <i class=entry.icon></i>
            </div>
            <div class="activity-content">
                <p>
                    <strong>{entry.headline}</strong>
                    " "
                    {entry.detail}
                </p>
                <span class="activity-time">{entry.time}</span>
            </div>
        </div>
    }
}

#[component]
pub fn ActivityList(activities: RwSignal<VecDeque<ActivityEntry>>) -> impl IntoView {
    view! {
        <div class="activity-list">
            {move || {
                activities
                    .get()
                    .into_iter()
                    .map(|entry| view! { <ActivityItem entry=entry/> })
                    .collect_view()
            }}
        </div>
    }
}
