use leptos::*;

use crate::pages::analytics::view_model::{conic_gradient, AnalyticsBar, UsageFill};

#[component]
pub fn UtilizationRing(percent: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="chart-container">
            <div
                class="chart-progress"
                style=move || format!("background: {};", conic_gradient(percent.get()))
            >
                <div class="chart-center">
                    <span class="chart-value">{move || format!("{}%", percent.get())}</span>
                    <span class="chart-label">"Utilized"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn BookingBars(bars: RwSignal<Vec<AnalyticsBar>>) -> impl IntoView {
    view! {
        <div class="bar-chart">
            <For
                each=move || bars.get().into_iter().enumerate()
                key=|(index, bar)| (*index, bar.generation)
                children=|(_, bar)| {
                    view! {
                        <div class="bar-group">
                            <div
                                class="bar"
                                style=format!("height: {}%;", bar.height_percent)
                                title=format!("{}%", bar.height_percent)
                            ></div>
                            <span class="bar-label">{bar.label}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn UsageBars(usage: RwSignal<Vec<UsageFill>>) -> impl IntoView {
    let count = usage.with_untracked(Vec::len);
    view! {
        <div class="usage-list">
            {(0..count)
                .map(|index| {
                    let fill = move || usage.with(|list| list.get(index).cloned());
                    view! {
                        <div class="usage-item">
                            <span class="usage-label">
                                {move || fill().map(|f| f.label).unwrap_or_default()}
                            </span>
                            <div class="usage-bar">
                                <div
                                    class="usage-fill"
                                    style=move || {
                                        format!("width: {}%;", fill().map(|f| f.displayed).unwrap_or(0))
                                    }
                                ></div>
                            </div>
                            <span class="usage-value">
                                {move || fill().map(|f| format!("{}%", f.percent)).unwrap_or_default()}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
