use leptos::*;
use leptos_meta::Title;

use super::{
    components::{builder::ReportBuilder, recent::RecentReports, template_card::TemplateCard},
    repository,
};
use crate::{
    components::{
        cards::SectionCard,
        common::{Button, ButtonVariant},
        layout::Layout,
    },
    router::Page,
    state::{actions::DashboardAction, controller::use_controller},
    templates::FormTemplate,
};

#[component]
pub fn ReportsPage() -> impl IntoView {
    let controller = use_controller();
    controller.load_page(Page::Reports);
    let vm = controller.reports;

    let dispatch = {
        let controller = controller.clone();
        Callback::new(move |action: DashboardAction| controller.dispatch(action))
    };
    let on_generate = Callback::new(move |_| {
        let (report_type, format) = vm.selection();
        dispatch.call(DashboardAction::GenerateReport {
            report_type,
            format,
        });
    });
    let on_use = Callback::new(move |name: String| dispatch.call(DashboardAction::UseTemplate(name)));
    let on_edit = Callback::new(move |name: String| {
        dispatch.call(DashboardAction::OpenForm(FormTemplate::EditTemplate {
            template_id: name,
        }))
    });
    let on_share = Callback::new(move |id: String| {
        dispatch.call(DashboardAction::OpenForm(FormTemplate::ShareReport { report_id: id }))
    });
    let open_form = move |template: FormTemplate| {
        move |_| dispatch.call(DashboardAction::OpenForm(template.clone()))
    };
    let on_preview = move |_| {
        let report_type = vm.report_type.get_untracked().slug().to_string();
        dispatch.call(DashboardAction::OpenForm(FormTemplate::ReportPreview { report_type }))
    };

    view! {
        <Title text="Reports"/>
        <Layout>
            <div class="page-header">
                <div>
                    <h1>"Reports"</h1>
                    <p>"Build, schedule and share booking reports"</p>
                </div>
                <div class="page-actions">
                    <Button variant=ButtonVariant::Secondary icon="fas fa-folder-open" on:click=open_form(FormTemplate::LoadTemplate)>
                        "Load Template"
                    </Button>
                    <Button variant=ButtonVariant::Secondary icon="fas fa-list" on:click=open_form(FormTemplate::AllReports)>
                        "All Reports"
                    </Button>
                </div>
            </div>
            <div class="reports-grid">
                <SectionCard title="Report Builder">
                    <ReportBuilder vm=vm on_generate=on_generate/>
                    <Button variant=ButtonVariant::Secondary icon="fas fa-eye" on:click=on_preview>
                        "Preview"
                    </Button>
                </SectionCard>
                <SectionCard title="Templates">
                    <div class="templates-grid">
                        <For
                            each=move || vm.templates.get()
                            key=|template| template.name.clone()
                            children=move |template| {
                                view! { <TemplateCard template=template on_use=on_use on_edit=on_edit/> }
                            }
                        />
                    </div>
                    <Button variant=ButtonVariant::Small icon="fas fa-plus" on:click=open_form(FormTemplate::NewTemplate)>
                        "New Template"
                    </Button>
                </SectionCard>
                <SectionCard title="Recent Reports">
                    <RecentReports reports=repository::recent_reports() on_share=on_share/>
                </SectionCard>
            </div>
        </Layout>
    }
}
