pub mod activity;
pub mod quick_actions;
pub mod stats;
