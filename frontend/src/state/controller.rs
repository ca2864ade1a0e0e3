use leptos::*;
use std::rc::Rc;

use super::{
    actions::{DashboardAction, QuickAction},
    modal::{ModalBody, ModalStack},
    nav::NavState,
    notifications::{NotificationCenter, NotificationKind},
};
use crate::{
    config::DashboardConfig,
    pages::{
        analytics::view_model::AnalyticsViewModel, bookings::view_model::BookingsViewModel,
        dashboard::view_model::DashboardViewModel, reports::view_model::ReportsViewModel,
        rooms::view_model::RoomsViewModel,
    },
    router::Page,
    templates::FormTemplate,
    utils::scheduler::Scheduler,
};

/// One per mounted application. Owns the notification and modal stacks, the
/// per-page view models and the scheduler every delayed effect runs on.
#[derive(Clone)]
pub struct DashboardController {
    config: Rc<DashboardConfig>,
    scheduler: Scheduler,
    pub notifications: NotificationCenter,
    pub modals: ModalStack,
    pub nav: NavState,
    pub dashboard: DashboardViewModel,
    pub bookings: BookingsViewModel,
    pub analytics: AnalyticsViewModel,
    pub rooms: RoomsViewModel,
    pub reports: ReportsViewModel,
    /// Booking id waiting for the delete confirmation.
    pub pending_delete: RwSignal<Option<String>>,
    /// Route change requested by an action, consumed by the router.
    pub pending_route: RwSignal<Option<Page>>,
    pub current_page: RwSignal<Option<Page>>,
}

impl DashboardController {
    pub fn new(config: DashboardConfig, scheduler: Scheduler) -> Self {
        let notifications = NotificationCenter::new(scheduler.clone(), config.notification_ttl());
        let nav = NavState::new(config.nav_breakpoint_px);
        Self {
            config: Rc::new(config),
            scheduler,
            notifications,
            modals: ModalStack::new(),
            nav,
            dashboard: DashboardViewModel::new(),
            bookings: BookingsViewModel::new(),
            analytics: AnalyticsViewModel::new(),
            rooms: RoomsViewModel::new(),
            reports: ReportsViewModel::new(),
            pending_delete: create_rw_signal(None),
            pending_route: create_rw_signal(None),
            current_page: create_rw_signal(None),
        }
    }

    pub fn init(&self) {
        log::info!("{} ready", self.config.system_name);
        log::debug!("Initializing charts...");
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn settings_template(&self) -> FormTemplate {
        FormTemplate::Settings {
            system_name: self.config.system_name.clone(),
        }
    }

    /// Loads mock data for a page identifier. Unknown identifiers are ignored.
    pub fn load_page_data(&self, page: &str) {
        match page.parse::<Page>() {
            Ok(page) => self.load_page(page),
            Err(err) => log::debug!("Skipping page data load: {}", err),
        }
    }

    pub fn load_page(&self, page: Page) {
        self.current_page.set(Some(page));
        match page {
            Page::Dashboard => self.load_dashboard_data(),
            Page::Bookings => self.load_bookings_data(),
            Page::Analytics => self.load_analytics_data(),
            Page::Reports => self.load_reports_data(),
            Page::Rooms => self.load_rooms_data(),
        }
    }

    pub fn load_dashboard_data(&self) {
        self.dashboard
            .start_count_up(&self.scheduler, self.config.count_up_duration());
        self.dashboard.start_activity_feed(
            &self.scheduler,
            self.config.activity_interval(),
            self.config.activity_feed_capacity,
        );
    }

    pub fn load_bookings_data(&self) {
        log::info!("Loading bookings data...");
        self.bookings
            .reload(&self.scheduler, self.config.table_load_delay());
    }

    pub fn load_analytics_data(&self) {
        self.analytics
            .refresh(&self.scheduler, self.config.utilization_percent);
    }

    pub fn load_reports_data(&self) {
        log::info!("Loading reports data...");
    }

    pub fn load_rooms_data(&self) {
        log::info!("Loading rooms data...");
        self.rooms.load();
    }

    pub fn show_modal(&self, title: impl Into<String>, body: impl Into<ModalBody>) -> u64 {
        self.modals.open(title, body)
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.notifications.notify(message, kind)
    }

    /// Pages are separate routes; this only records the request.
    pub fn navigate_to_page(&self, page: Page) {
        log_navigation(page);
    }

    pub fn dispatch(&self, action: DashboardAction) {
        match action {
            DashboardAction::Quick(quick) => self.handle_quick_action(quick),
            DashboardAction::ApplyFilters => self.apply_filters(),
            DashboardAction::EditBooking(id) => {
                log::info!("Editing booking: {}", id);
                let template = FormTemplate::EditBooking { booking_id: id };
                self.show_modal(template.title(), template);
            }
            DashboardAction::ViewBooking(id) => {
                let template = FormTemplate::ViewBooking { booking_id: id };
                self.show_modal(template.title(), template);
            }
            DashboardAction::DeleteBooking(id) => {
                log::debug!("Confirm delete requested for {}", id);
                self.pending_delete.set(Some(id));
            }
            DashboardAction::ConfirmDelete => self.confirm_delete(),
            DashboardAction::CancelDelete => self.pending_delete.set(None),
            DashboardAction::Room { room, action } => {
                log::info!("{} action for {}", action.label().to_lowercase(), room);
                self.show_modal(action.modal_title(&room), action.template(&room));
            }
            DashboardAction::ToggleRoomStatus(room) => {
                if let Some(status) = self.rooms.toggle_status(&room) {
                    self.notifications
                        .success(format!("Room status updated to {}", status));
                }
            }
            DashboardAction::GenerateReport {
                report_type,
                format,
            } => {
                log::info!(
                    "Generating report: {} as {}",
                    report_type.slug(),
                    format.label()
                );
                self.notifications.info("Generating report...");
                let notifications = self.notifications.clone();
                self.scheduler
                    .set_timeout(self.config.report_delay(), move || {
                        notifications.success(format!(
                            "Report generated successfully in {} format",
                            format.label()
                        ));
                    });
            }
            DashboardAction::UseTemplate(name) => self.use_template(name),
            DashboardAction::OpenForm(template) => {
                self.show_modal(template.title(), template);
            }
        }
    }

    fn handle_quick_action(&self, action: QuickAction) {
        log::info!("Quick action: {}", action.label());
        if let Some(page) = action.target_page() {
            self.pending_route.set(Some(page));
            return;
        }
        match action {
            QuickAction::CreateBooking => {
                self.show_modal("Create Booking", FormTemplate::CreateBooking);
            }
            QuickAction::SystemSettings => {
                self.show_modal("System Settings", self.settings_template());
            }
            QuickAction::AddNewRoom | QuickAction::GenerateReport => {}
        }
    }

    fn apply_filters(&self) {
        let criteria = self.bookings.filters.criteria();
        log::info!("Applying filters: {}", criteria.describe());
        self.notifications.info("Applying filters...");

        let bookings = self.bookings;
        let notifications = self.notifications.clone();
        let scheduler = self.scheduler.clone();
        let reload_delay = self.config.table_load_delay();
        self.scheduler
            .set_timeout(self.config.filter_delay(), move || {
                bookings.reload(&scheduler, reload_delay);
                notifications.success("Filters applied successfully");
            });
    }

    fn confirm_delete(&self) {
        let Some(id) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        log::info!("Deleting booking: {}", id);
        self.notifications
            .success(format!("Booking {} deleted successfully", id));
        self.bookings.remove(&id);
    }

    fn use_template(&self, name: String) {
        log::info!("Using template: {}", name);
        self.notifications
            .success(format!("Template \"{}\" applied", name));
        if let Some(template) = self.reports.template_named(&name) {
            self.reports.report_type.set(template.report_type);
        }
        self.scheduler
            .set_timeout(self.config.template_navigation_delay(), || {
                log_navigation(Page::Reports)
            });
    }
}

fn log_navigation(page: Page) {
    log::info!("Navigation to {} is handled by the router", page.as_str());
}

/// Controller provided by the application root. Views rendered outside of it
/// get a fresh default controller, registered for their subtree.
pub fn use_controller() -> DashboardController {
    use_context::<DashboardController>().unwrap_or_else(|| {
        let controller = DashboardController::new(DashboardConfig::default(), Scheduler::new());
        provide_context(controller.clone());
        controller
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{BookingStatus, ReportFormat, ReportType, RoomStatus},
        pages::bookings::view_model::TableState,
        state::actions::RoomAction,
        test_support::helpers::{test_controller, with_runtime},
    };
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn messages(controller: &DashboardController) -> Vec<String> {
        controller
            .notifications
            .snapshot()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }

    #[test]
    fn bookings_page_populates_four_rows_after_delay() {
        with_runtime(|| {
            let controller = test_controller();
            controller.load_page_data("bookings");
            assert_eq!(
                controller.bookings.table.get_untracked(),
                TableState::Loading
            );
            controller.scheduler().advance(ms(1000));
            let rows: Vec<_> = controller
                .bookings
                .rows_untracked()
                .into_iter()
                .map(|b| (b.id, b.teacher, b.room, b.datetime, b.duration, b.status))
                .collect();
            let expected = [
                ("#BK001", "Dr. Sarah Smith", "Room 201", "Dec 15, 2024 2:00 PM", "2 hours", BookingStatus::Confirmed),
                ("#BK002", "Prof. John Doe", "Room 105", "Dec 15, 2024 10:00 AM", "1.5 hours", BookingStatus::Pending),
                ("#BK003", "Dr. Emily Brown", "Room 301", "Dec 16, 2024 9:00 AM", "3 hours", BookingStatus::Confirmed),
                ("#BK004", "Prof. Michael Johnson", "Room 102", "Dec 16, 2024 1:00 PM", "2.5 hours", BookingStatus::Cancelled),
            ]
            .map(|(id, teacher, room, datetime, duration, status)| {
                (
                    id.to_string(),
                    teacher.to_string(),
                    room.to_string(),
                    datetime.to_string(),
                    duration.to_string(),
                    status,
                )
            });
            assert_eq!(rows, expected);
            assert_eq!(controller.current_page.get_untracked(), Some(Page::Bookings));
        });
    }

    #[test]
    fn unknown_page_changes_nothing() {
        with_runtime(|| {
            let controller = test_controller();
            controller.load_page_data("unknown");
            assert_eq!(controller.current_page.get_untracked(), None);
            assert_eq!(controller.scheduler().pending(), 0);
            assert!(controller.notifications.snapshot().is_empty());
            assert!(controller.modals.snapshot().is_empty());
            assert_eq!(
                controller.bookings.table.get_untracked(),
                TableState::Ready(Vec::new())
            );
        });
    }

    #[test]
    fn dashboard_reload_keeps_single_feed_interval() {
        with_runtime(|| {
            let controller = test_controller();
            controller.load_page(Page::Dashboard);
            controller.scheduler().advance(ms(2000));
            controller.load_page(Page::Dashboard);
            controller.scheduler().advance(ms(2000));
            assert_eq!(controller.scheduler().pending(), 1);

            controller.scheduler().advance(ms(30_000 * 20));
            assert_eq!(controller.dashboard.activities.get_untracked().len(), 5);
        });
    }

    #[test]
    fn quick_actions_route_or_open_modals() {
        with_runtime(|| {
            let controller = test_controller();
            controller.dispatch(DashboardAction::Quick(QuickAction::AddNewRoom));
            assert_eq!(controller.pending_route.get_untracked(), Some(Page::Rooms));
            controller.dispatch(DashboardAction::Quick(QuickAction::GenerateReport));
            assert_eq!(
                controller.pending_route.get_untracked(),
                Some(Page::Reports)
            );

            controller.dispatch(DashboardAction::Quick(QuickAction::CreateBooking));
            controller.dispatch(DashboardAction::Quick(QuickAction::SystemSettings));
            let titles: Vec<_> = controller
                .modals
                .snapshot()
                .into_iter()
                .map(|m| m.title)
                .collect();
            assert_eq!(titles, vec!["Create Booking", "System Settings"]);
        });
    }

    #[test]
    fn settings_modal_uses_configured_system_name() {
        with_runtime(|| {
            let config = DashboardConfig {
                system_name: "Campus Rooms".into(),
                ..DashboardConfig::default()
            };
            let controller = DashboardController::new(config, Scheduler::new());
            controller.dispatch(DashboardAction::Quick(QuickAction::SystemSettings));
            let modal = &controller.modals.snapshot()[0];
            assert_eq!(
                modal.body,
                ModalBody::Form(FormTemplate::Settings {
                    system_name: "Campus Rooms".into(),
                })
            );
        });
    }

    #[test]
    fn apply_filters_reloads_table_and_confirms() {
        with_runtime(|| {
            let controller = test_controller();
            controller.bookings.filters.room.set("Room 201".into());
            controller.dispatch(DashboardAction::ApplyFilters);
            assert_eq!(messages(&controller), vec!["Applying filters..."]);

            controller.scheduler().advance(ms(1000));
            assert_eq!(
                controller.bookings.table.get_untracked(),
                TableState::Loading
            );
            assert!(messages(&controller).contains(&"Filters applied successfully".to_string()));

            controller.scheduler().advance(ms(1000));
            assert_eq!(controller.bookings.rows_untracked().len(), 4);
        });
    }

    #[test]
    fn delete_requires_confirmation() {
        with_runtime(|| {
            let controller = test_controller();
            controller.load_page(Page::Bookings);
            controller.scheduler().advance(ms(1000));

            controller.dispatch(DashboardAction::DeleteBooking("#BK003".into()));
            assert_eq!(
                controller.pending_delete.get_untracked(),
                Some("#BK003".into())
            );
            controller.dispatch(DashboardAction::CancelDelete);
            assert_eq!(controller.bookings.rows_untracked().len(), 4);

            controller.dispatch(DashboardAction::DeleteBooking("#BK003".into()));
            controller.dispatch(DashboardAction::ConfirmDelete);
            assert_eq!(controller.pending_delete.get_untracked(), None);
            assert_eq!(controller.bookings.rows_untracked().len(), 3);
            assert_eq!(
                messages(&controller),
                vec!["Booking #BK003 deleted successfully"]
            );

            controller.dispatch(DashboardAction::ConfirmDelete);
            assert_eq!(messages(&controller).len(), 1);
        });
    }

    #[test]
    fn edit_booking_opens_titled_modal() {
        with_runtime(|| {
            let controller = test_controller();
            controller.dispatch(DashboardAction::EditBooking("#BK001".into()));
            let modals = controller.modals.snapshot();
            assert_eq!(modals[0].title, "Edit Booking #BK001");
            assert_eq!(
                modals[0].body,
                ModalBody::Form(FormTemplate::EditBooking {
                    booking_id: "#BK001".into()
                })
            );
        });
    }

    #[test]
    fn room_actions_and_status_cycle() {
        with_runtime(|| {
            let controller = test_controller();
            controller.dispatch(DashboardAction::Room {
                room: "Room 201".into(),
                action: RoomAction::Maintenance,
            });
            assert_eq!(controller.modals.snapshot()[0].title, "Room 201 Maintenance");

            controller.dispatch(DashboardAction::ToggleRoomStatus("Room 101".into()));
            assert!(controller.notifications.snapshot().is_empty());

            controller.load_page_data("rooms");
            controller.dispatch(DashboardAction::ToggleRoomStatus("Room 101".into()));
            assert_eq!(
                messages(&controller),
                vec!["Room status updated to occupied"]
            );
            assert_eq!(
                controller.rooms.rooms.get_untracked()[0].status,
                RoomStatus::Occupied
            );
        });
    }

    #[test]
    fn report_generation_completes_after_delay() {
        with_runtime(|| {
            let controller = test_controller();
            controller.dispatch(DashboardAction::GenerateReport {
                report_type: ReportType::RoomUtilization,
                format: ReportFormat::Excel,
            });
            assert_eq!(messages(&controller), vec!["Generating report..."]);
            controller.scheduler().advance(ms(1999));
            assert_eq!(messages(&controller).len(), 1);
            controller.scheduler().advance(ms(1));
            assert!(messages(&controller)
                .contains(&"Report generated successfully in Excel format".to_string()));
        });
    }

    #[test]
    fn using_template_selects_its_report_type() {
        with_runtime(|| {
            let controller = test_controller();
            controller.dispatch(DashboardAction::UseTemplate("Monthly Analytics".into()));
            assert_eq!(
                messages(&controller),
                vec!["Template \"Monthly Analytics\" applied"]
            );
            assert_eq!(
                controller.reports.report_type.get_untracked(),
                ReportType::RoomUtilization
            );
            assert_eq!(controller.scheduler().pending(), 2);
            controller.scheduler().advance(ms(500));
            assert_eq!(controller.scheduler().pending(), 1);
        });
    }

    #[test]
    fn analytics_load_sets_configured_utilization() {
        with_runtime(|| {
            let controller = test_controller();
            controller.load_page_data("analytics");
            assert_eq!(controller.analytics.utilization.get_untracked(), 78);
        });
    }
}
