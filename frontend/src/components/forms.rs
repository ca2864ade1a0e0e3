use leptos::*;

use crate::templates::{
    Choice, DetailRow, FieldControl, FormField, ListingAccessory, ListingItem, ScheduleSlot,
    TemplateContent,
};

fn field_control(control: FieldControl) -> View {
    match control {
        FieldControl::Input {
            input_type,
            placeholder,
            value,
        } => view! {
            <input
                type=input_type.as_attr()
                class="form-input"
                placeholder=placeholder
                value=value
            />
        }
        .into_view(),
        FieldControl::TextArea {
            rows,
            placeholder,
            value,
        } => view! {
            <textarea class="form-input" rows=rows placeholder=placeholder>
                {value.unwrap_or_default()}
            </textarea>
        }
        .into_view(),
        FieldControl::Select { options } => view! {
            <select class="form-select">
                {options
                    .into_iter()
                    .map(|option| view! { <option>{option}</option> })
                    .collect_view()}
            </select>
        }
        .into_view(),
        FieldControl::Checkbox {
            checked,
            required,
            caption,
        } => view! {
            <input type="checkbox" checked=checked required=required/>
            {caption.map(|text| view! { <span class="checkbox-caption">{text}</span> })}
        }
        .into_view(),
    }
}

#[component]
pub fn FormFieldView(field: FormField) -> impl IntoView {
    let is_checkbox = matches!(field.control, FieldControl::Checkbox { .. });
    if is_checkbox {
        view! {
            <div class="form-group">
                <label class="checkbox-label">
                    {field_control(field.control)}
                    " "
                    {field.label}
                </label>
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="form-group">
                <label>{field.label}</label>
                {field_control(field.control)}
            </div>
        }
        .into_view()
    }
}

fn schedule_slot(slot: ScheduleSlot) -> impl IntoView {
    let class = if slot.available {
        "booking available"
    } else {
        "booking"
    };
    view! {
        <div class="time-slot">
            <span class="time">{slot.time}</span>
            <div class=class>{slot.booking}</div>
        </div>
    }
}

fn detail_row(row: DetailRow) -> impl IntoView {
    view! {
        <div class="detail-row">
            <strong>{format!("{}:", row.label)}</strong>
            " "
            <span>{row.value}</span>
        </div>
    }
}

fn listing_item(item: ListingItem) -> impl IntoView {
    let accessory = match item.accessory {
        ListingAccessory::Download => view! {
            <button type="button" class="btn-small">
                <i class="fas fa-download"></i>
            </button>
        }
        .into_view(),
        ListingAccessory::Status { class, label } => view! {
            <span class=format!("status {class}")>{label}</span>
        }
        .into_view(),
    };
    view! {
        <div class="listing-item">
            <span>{item.text}</span>
            {accessory}
        </div>
    }
}

fn choice(name: String, choice: Choice) -> impl IntoView {
    view! {
        <label class="choice">
            <input type="radio" name=name value=choice.value/>
            " "
            {choice.label}
        </label>
    }
}

/// Renders a modal body view-model.
#[component]
pub fn TemplateView(content: TemplateContent) -> impl IntoView {
    match content {
        TemplateContent::Form { heading, fields } => view! {
            <div class="template-form">
                {heading.map(|text| view! { <h4>{text}</h4> })}
                {fields
                    .into_iter()
                    .map(|field| view! { <FormFieldView field=field/> })
                    .collect_view()}
            </div>
        }
        .into_view(),
        TemplateContent::Schedule { heading, slots } => view! {
            <div class="schedule-view">
                <h4>{heading}</h4>
                <div class="schedule-timeline">
                    {slots.into_iter().map(schedule_slot).collect_view()}
                </div>
            </div>
        }
        .into_view(),
        TemplateContent::Details { heading, rows } => view! {
            <div class="details-view">
                <h4>{heading}</h4>
                {rows.into_iter().map(detail_row).collect_view()}
            </div>
        }
        .into_view(),
        TemplateContent::Listing { heading, items } => view! {
            <div class="listing-view">
                <h4>{heading}</h4>
                {items.into_iter().map(listing_item).collect_view()}
            </div>
        }
        .into_view(),
        TemplateContent::Choices {
            heading,
            name,
            options,
        } => view! {
            <div class="form-group">
                <label>{heading}</label>
                <div class="choice-list">
                    {options
                        .into_iter()
                        .map(|option| choice(name.clone(), option))
                        .collect_view()}
                </div>
            </div>
        }
        .into_view(),
        TemplateContent::Preview {
            heading,
            summary,
            sample,
        } => view! {
            <div class="report-preview">
                <h4>{heading}</h4>
                <p>{summary}</p>
                <div class="preview-sample">{sample}</div>
            </div>
        }
        .into_view(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::templates::FormTemplate;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn create_booking_form_renders_every_field() {
        let html = render_to_string(|| {
            view! { <TemplateView content=FormTemplate::CreateBooking.content()/> }
        });
        for label in ["Teacher", "Room", "Date", "Start Time", "Duration (hours)"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("type=\"time\""));
        assert!(html.contains("placeholder=\"2\""));
        assert!(html.contains("Dr. Sarah Smith"));
    }

    #[test]
    fn settings_form_prefills_name_and_checkboxes() {
        let html = render_to_string(|| {
            view! { <TemplateView content=FormTemplate::Settings {
                system_name: "EduBook Admin".into(),
            }
            .content()/> }
        });
        assert!(html.contains("value=\"EduBook Admin\""));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn schedule_renders_time_slots() {
        let html = render_to_string(|| {
            let content = FormTemplate::RoomSchedule {
                room_name: "Room 201".into(),
            }
            .content();
            view! { <TemplateView content=content/> }
        });
        assert_eq!(html.matches("class=\"time-slot\"").count(), 3);
        assert!(html.contains("Room 201"));
    }

    #[test]
    fn template_choices_share_radio_name() {
        let html = render_to_string(|| {
            view! { <TemplateView content=FormTemplate::LoadTemplate.content()/> }
        });
        assert_eq!(html.matches("name=\"template\"").count(), 3);
    }
}
