use leptos::*;

use crate::{
    components::empty_state::EmptyState,
    model::Booking,
    pages::bookings::view_model::TableState,
    state::{actions::DashboardAction, controller::use_controller},
};

#[component]
fn BookingRow(booking: Booking) -> impl IntoView {
    let controller = use_controller();
    let action_button = |icon: &'static str, label: &'static str, action: DashboardAction| {
        let controller = controller.clone();
        view! {
            <button
                type="button"
                class="action-icon"
                title=label
                aria-label=label
                on:click=move |_| controller.dispatch(action.clone())
            >
                <i class=icon></i>
            </button>
        }
    };
    let id = booking.id.clone();
    view! {
        <tr>
            <td>{booking.id}</td>
            <td>{booking.teacher}</td>
            <td>{booking.room}</td>
            <td>{booking.datetime}</td>
            <td>{booking.duration}</td>
            <td>
                <span class=format!("status {}", booking.status.as_str())>
                    {booking.status.label()}
                </span>
            </td>
            <td>
                {action_button("fas fa-eye", "View", DashboardAction::ViewBooking(id.clone()))}
                {action_button("fas fa-edit", "Edit", DashboardAction::EditBooking(id.clone()))}
                {action_button("fas fa-trash", "Delete", DashboardAction::DeleteBooking(id))}
            </td>
        </tr>
    }
}

fn loading_row() -> impl IntoView {
    view! {
        <tr class="loading-row">
            <td colspan="7">
                <i class="fas fa-spinner fa-spin"></i>
                " Loading bookings..."
            </td>
        </tr>
    }
}

#[component]
pub fn BookingsTable(table: RwSignal<TableState>) -> impl IntoView {
    let is_empty =
        move || table.with(|state| matches!(state, TableState::Ready(rows) if rows.is_empty()));
    view! {
        <div class="table-container">
            <table class="bookings-table">
                <thead>
                    <tr>
                        <th>"Booking ID"</th>
                        <th>"Teacher"</th>
                        <th>"Room"</th>
                        <th>"Date & Time"</th>
                        <th>"Duration"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || match table.get() {
                        TableState::Loading => loading_row().into_view(),
                        TableState::Ready(rows) => rows
                            .into_iter()
                            .map(|booking| view! { <BookingRow booking=booking/> })
                            .collect_view(),
                    }}
                </tbody>
            </table>
            <Show when=is_empty>
                <EmptyState
                    title="No bookings to show"
                    description="Adjust the filters or create a new booking."
                    icon="fas fa-calendar-times"
                />
            </Show>
        </div>
    }
}
