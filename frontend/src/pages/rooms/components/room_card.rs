use leptos::*;

use crate::{
    model::Room,
    state::{
        actions::{DashboardAction, RoomAction},
        controller::use_controller,
    },
};

#[component]
pub fn RoomCard(room: Room) -> impl IntoView {
    let controller = use_controller();
    let rooms = controller.rooms.rooms;
    let toggle_enabled = controller.rooms.status_toggle_enabled;
    let name = room.name.clone();
    let status = {
        let name = name.clone();
        move || {
            rooms.with(|list| {
                list.iter()
                    .find(|candidate| candidate.name == name)
                    .map(|candidate| candidate.status)
                    .unwrap_or(room.status)
            })
        }
    };
    let status_for_label = status.clone();

    let on_status_click = {
        let controller = controller.clone();
        let name = name.clone();
        move |_| controller.dispatch(DashboardAction::ToggleRoomStatus(name.clone()))
    };

    let equipment = room.equipment.join(", ");
    let accessibility = if room.accessible {
        "Wheelchair accessible"
    } else {
        "Not accessible"
    };

    view! {
        <div class="room-card">
            <div class="room-header">
                <h3>{room.name.clone()}</h3>
                <button
                    type="button"
                    class=move || format!("room-status {}", status().as_str())
                    disabled=move || !toggle_enabled.get()
                    title="Click to change status"
                    on:click=on_status_click
                >
                    {move || status_for_label().label()}
                </button>
            </div>
            <div class="room-details">
                <p>
                    <i class="fas fa-users"></i>
                    {format!(" Capacity: {}", room.capacity)}
                </p>
                <p>
                    <i class="fas fa-tools"></i>
                    {format!(" Equipment: {}", equipment)}
                </p>
                <p>
                    <i class="fas fa-wheelchair"></i>
                    {format!(" {}", accessibility)}
                </p>
            </div>
            <div class="room-actions">
                {RoomAction::ALL
                    .into_iter()
                    .map(|action| {
                        let controller = controller.clone();
                        let name = name.clone();
                        view! {
                            <button
                                type="button"
                                class="room-btn"
                                on:click=move |_| {
                                    controller
                                        .dispatch(DashboardAction::Room {
                                            room: name.clone(),
                                            action,
                                        })
                                }
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
