use leptos::*;

use crate::{
    components::common::Button,
    model::{ReportFormat, ReportType},
    pages::reports::view_model::ReportsViewModel,
};

#[component]
pub fn ReportBuilder(vm: ReportsViewModel, on_generate: Callback<()>) -> impl IntoView {
    view! {
        <div class="report-builder">
            <div class="form-group">
                <label for="reportType">"Report Type"</label>
                <select
                    id="reportType"
                    class="form-select"
                    on:change=move |ev| {
                        if let Some(kind) = ReportType::from_slug(&event_target_value(&ev)) {
                            vm.report_type.set(kind);
                        }
                    }
                >
                    {ReportType::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option value=kind.slug() selected=move || vm.report_type.get() == kind>
                                    {kind.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="reportFormat">"Format"</label>
                <select
                    id="reportFormat"
                    class="form-select"
                    on:change=move |ev| {
                        if let Some(format) = ReportFormat::from_label(&event_target_value(&ev)) {
                            vm.format.set(format);
                        }
                    }
                >
                    {ReportFormat::ALL
                        .into_iter()
                        .map(|format| {
                            view! {
                                <option value=format.label() selected=move || vm.format.get() == format>
                                    {format.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <Button icon="fas fa-file-export" on:click=move |_| on_generate.call(())>
                "Generate Report"
            </Button>
        </div>
    }
}
