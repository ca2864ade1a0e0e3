use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use std::str::FromStr;

use crate::{
    config::DashboardConfig,
    error::DashboardError,
    pages::{
        analytics::AnalyticsPage, bookings::BookingsPage, dashboard::DashboardPage,
        reports::ReportsPage, rooms::RoomsPage,
    },
    state::controller::DashboardController,
    utils::scheduler::Scheduler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Bookings,
    Analytics,
    Reports,
    Rooms,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Bookings,
        Page::Analytics,
        Page::Reports,
        Page::Rooms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Bookings => "bookings",
            Page::Analytics => "analytics",
            Page::Reports => "reports",
            Page::Rooms => "rooms",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Bookings => "/bookings",
            Page::Analytics => "/analytics",
            Page::Reports => "/reports",
            Page::Rooms => "/rooms",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Bookings => "Bookings",
            Page::Analytics => "Analytics",
            Page::Reports => "Reports",
            Page::Rooms => "Rooms",
        }
    }
}

impl FromStr for Page {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownPage(s.to_string()))
    }
}

pub const ROUTE_PATHS: &[&str] = &["/", "/bookings", "/analytics", "/reports", "/rooms"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

/// Builds the single controller for this mount and hands it to every page
/// through context.
pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let scheduler = Scheduler::new();
    #[cfg(target_arch = "wasm32")]
    crate::utils::scheduler::drive_with_browser_clock(scheduler.clone());

    let controller = DashboardController::new(DashboardConfig::load(), scheduler);
    controller.init();
    provide_context(controller);

    view! {
        <Router>
            <RouteSync/>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/bookings" view=BookingsPage/>
                <Route path="/analytics" view=AnalyticsPage/>
                <Route path="/reports" view=ReportsPage/>
                <Route path="/rooms" view=RoomsPage/>
            </Routes>
        </Router>
    }
}

/// Follows navigation requests raised by controller actions.
#[component]
fn RouteSync() -> impl IntoView {
    let controller = crate::state::controller::use_controller();
    let navigate = use_navigate();
    let pending_route = controller.pending_route;
    create_effect(move |_| {
        if let Some(page) = pending_route.get() {
            pending_route.set(None);
            navigate(page.path(), Default::default());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_page_has_a_route() {
        for page in Page::ALL {
            assert!(ROUTE_PATHS.contains(&page.path()), "{:?} has no route", page);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn parses_page_identifiers() {
        assert_eq!("bookings".parse::<Page>(), Ok(Page::Bookings));
        assert_eq!(
            "unknown".parse::<Page>(),
            Err(DashboardError::UnknownPage("unknown".into()))
        );
        assert!("Rooms".parse::<Page>().is_err());
    }
}
