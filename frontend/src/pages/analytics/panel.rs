use leptos::*;
use leptos_meta::Title;

use super::components::charts::{BookingBars, UsageBars, UtilizationRing};
use crate::{
    components::{cards::SectionCard, layout::Layout},
    router::Page,
    state::controller::use_controller,
};

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let controller = use_controller();
    controller.load_page(Page::Analytics);
    let vm = controller.analytics;

    view! {
        <Title text="Analytics"/>
        <Layout>
            <div class="page-header">
                <h1>"Analytics"</h1>
                <p>"Room utilization and booking trends"</p>
            </div>
            <div class="analytics-grid">
                <SectionCard title="Overall Utilization">
                    <UtilizationRing percent=vm.utilization/>
                </SectionCard>
                <SectionCard title="Bookings This Week">
                    <BookingBars bars=vm.bars/>
                </SectionCard>
                <SectionCard title="Room Usage">
                    <UsageBars usage=vm.usage/>
                </SectionCard>
            </div>
        </Layout>
    }
}
