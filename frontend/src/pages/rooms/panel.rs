use leptos::*;
use leptos_meta::Title;

use super::components::room_card::RoomCard;
use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::Layout,
    },
    router::Page,
    state::{actions::DashboardAction, controller::use_controller},
    templates::FormTemplate,
};

#[component]
pub fn RoomsPage() -> impl IntoView {
    let controller = use_controller();
    controller.load_page(Page::Rooms);
    let rooms = controller.rooms.rooms;

    let open_form = move |template: FormTemplate| {
        let controller = controller.clone();
        move |_| controller.dispatch(DashboardAction::OpenForm(template.clone()))
    };

    view! {
        <Title text="Rooms"/>
        <Layout>
            <div class="page-header">
                <div>
                    <h1>"Rooms"</h1>
                    <p>"Manage classrooms, equipment and availability"</p>
                </div>
                <div class="page-actions">
                    <Button
                        variant=ButtonVariant::Secondary
                        icon="fas fa-tools"
                        on:click=open_form(FormTemplate::AllMaintenance)
                    >
                        "All Maintenance"
                    </Button>
                    <Button icon="fas fa-plus" on:click=open_form(FormTemplate::AddRoom)>
                        "Add Room"
                    </Button>
                </div>
            </div>
            <div class="rooms-grid">
                <For
                    each=move || rooms.get()
                    key=|room| room.name.clone()
                    children=|room| view! { <RoomCard room=room/> }
                />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::test_controller, ssr::render_to_string};

    #[test]
    fn renders_a_card_per_room_with_toggle_enabled() {
        let html = render_to_string(|| {
            provide_context(test_controller());
            view! { <RoomsPage/> }
        });
        assert_eq!(html.matches("class=\"room-card\"").count(), 5);
        assert!(html.contains("Add Room"));
        assert!(html.contains("All Maintenance"));
        assert!(!html.contains("disabled"));
    }
}
