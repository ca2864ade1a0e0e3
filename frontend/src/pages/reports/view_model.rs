use leptos::*;

use super::repository;
use crate::model::{ReportFormat, ReportTemplate, ReportType};

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub report_type: RwSignal<ReportType>,
    pub format: RwSignal<ReportFormat>,
    pub templates: RwSignal<Vec<ReportTemplate>>,
}

impl Default for ReportsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportsViewModel {
    pub fn new() -> Self {
        Self {
            report_type: create_rw_signal(ReportType::BookingSummary),
            format: create_rw_signal(ReportFormat::default()),
            templates: create_rw_signal(repository::templates()),
        }
    }

    pub fn selection(&self) -> (ReportType, ReportFormat) {
        (self.report_type.get_untracked(), self.format.get_untracked())
    }

    pub fn template_named(&self, name: &str) -> Option<ReportTemplate> {
        self.templates
            .with_untracked(|list| list.iter().find(|t| t.name == name).cloned())
    }
}
