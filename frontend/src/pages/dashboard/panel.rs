use leptos::*;
use leptos_meta::Title;

use super::components::{activity::ActivityList, quick_actions::QuickActions, stats::DashboardStats};
use crate::{
    components::{cards::SectionCard, layout::Layout},
    router::Page,
    state::controller::use_controller,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = use_controller();
    controller.load_page(Page::Dashboard);
    let vm = controller.dashboard;

    view! {
        <Title text="Dashboard"/>
        <Layout>
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p>"Overview of rooms, bookings and recent activity"</p>
            </div>
            <DashboardStats stats=vm.stats/>
            <div class="dashboard-grid">
                <SectionCard title="Recent Activity" class="recent-activity">
                    <ActivityList activities=vm.activities/>
                </SectionCard>
                <SectionCard title="Quick Actions">
                    <QuickActions/>
                </SectionCard>
            </div>
        </Layout>
    }
}
