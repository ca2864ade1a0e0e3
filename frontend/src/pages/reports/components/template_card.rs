use leptos::*;

use crate::model::ReportTemplate;

#[component]
pub fn TemplateCard(
    template: ReportTemplate,
    on_use: Callback<String>,
    on_edit: Callback<String>,
) -> impl IntoView {
    let name = template.name.clone();
    let edit_name = template.name.clone();
    view! {
        <div class="template-card">
            <h4>{template.name}</h4>
            <p>{template.description}</p>
            <span class="template-type">{template.report_type.label()}</span>
            <div class="template-actions">
                <button
                    type="button"
                    class="template-btn"
                    on:click=move |_| on_use.call(name.clone())
                >
                    "Use Template"
                </button>
                <button
                    type="button"
                    class="btn-small"
                    on:click=move |_| on_edit.call(edit_name.clone())
                >
                    <i class="fas fa-edit"></i>
                </button>
            </div>
        </div>
    }
}
