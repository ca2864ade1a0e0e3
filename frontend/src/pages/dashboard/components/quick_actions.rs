use leptos::*;

use crate::state::{
    actions::{DashboardAction, QuickAction},
    controller::use_controller,
};

#[component]
pub fn QuickActions() -> impl IntoView {
    let controller = use_controller();
    view! {
        <div class="quick-actions">
            {QuickAction::ALL
                .into_iter()
                .map(|action| {
                    let controller = controller.clone();
                    view! {
                        <button
                            type="button"
                            class="action-btn"
                            on:click=move |_| controller.dispatch(DashboardAction::Quick(action))
                        >
                            <i class=action.icon()></i>
                            <span>{action.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
