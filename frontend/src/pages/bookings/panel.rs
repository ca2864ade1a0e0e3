use leptos::*;
use leptos_meta::Title;

use super::components::{filters::BookingFilters, table::BookingsTable};
use crate::{
    components::{
        cards::SectionCard,
        common::{Button, ButtonVariant},
        layout::Layout,
    },
    entry,
    router::Page,
    state::{actions::DashboardAction, controller::use_controller},
    templates::FormTemplate,
};

#[component]
pub fn BookingsPage() -> impl IntoView {
    let controller = use_controller();
    controller.load_page(Page::Bookings);
    let vm = controller.bookings;

    let on_apply = {
        let controller = controller.clone();
        Callback::new(move |_| controller.dispatch(DashboardAction::ApplyFilters))
    };
    let on_new_booking = {
        let controller = controller.clone();
        move |_| entry::show_create_booking_modal(Some(&controller))
    };
    let on_bulk_actions = {
        let controller = controller.clone();
        move |_| controller.dispatch(DashboardAction::OpenForm(FormTemplate::BulkActions))
    };

    view! {
        <Title text="Bookings"/>
        <Layout>
            <div class="page-header">
                <div>
                    <h1>"Bookings"</h1>
                    <p>"Review, filter and manage room bookings"</p>
                </div>
                <div class="page-actions">
                    <Button variant=ButtonVariant::Secondary icon="fas fa-tasks" on:click=on_bulk_actions>
                        "Bulk Actions"
                    </Button>
                    <Button icon="fas fa-plus" on:click=on_new_booking>
                        "New Booking"
                    </Button>
                </div>
            </div>
            <SectionCard title="Filters">
                <BookingFilters filters=vm.filters on_apply=on_apply/>
            </SectionCard>
            <SectionCard title="All Bookings">
                <BookingsTable table=vm.table/>
            </SectionCard>
        </Layout>
    }
}
