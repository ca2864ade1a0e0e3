pub mod analytics;
pub mod bookings;
pub mod dashboard;
pub mod reports;
pub mod rooms;

pub use analytics::AnalyticsPage;
pub use bookings::BookingsPage;
pub use dashboard::DashboardPage;
pub use reports::ReportsPage;
pub use rooms::RoomsPage;
