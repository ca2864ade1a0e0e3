use leptos::*;

use crate::{
    components::common::{Button, ButtonVariant},
    pages::bookings::{repository::ROOM_FILTER_OPTIONS, view_model::BookingFilterState},
};

#[component]
pub fn BookingFilters(filters: BookingFilterState, on_apply: Callback<()>) -> impl IntoView {
    view! {
        <div class="filters">
            <div class="filter-group">
                <label for="startDate">"Start Date"</label>
                <input
                    id="startDate"
                    type="date"
                    class="form-input"
                    prop:value=move || filters.start_date.get()
                    on:input=move |ev| filters.start_date.set(event_target_value(&ev))
                />
            </div>
            <div class="filter-group">
                <label for="endDate">"End Date"</label>
                <input
                    id="endDate"
                    type="date"
                    class="form-input"
                    prop:value=move || filters.end_date.get()
                    on:input=move |ev| filters.end_date.set(event_target_value(&ev))
                />
            </div>
            <div class="filter-group">
                <label for="roomFilter">"Room"</label>
                <select
                    id="roomFilter"
                    class="filter-select"
                    on:change=move |ev| filters.room.set(event_target_value(&ev))
                >
                    {ROOM_FILTER_OPTIONS
                        .iter()
                        .map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option value=value selected=move || filters.room.get() == value>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <Button
                variant=ButtonVariant::Secondary
                class="filter-btn"
                icon="fas fa-filter"
                on:click=move |_| on_apply.call(())
            >
                "Apply Filters"
            </Button>
        </div>
    }
}
