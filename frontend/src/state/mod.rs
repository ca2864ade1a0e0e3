pub mod actions;
pub mod controller;
pub mod modal;
pub mod nav;
pub mod notifications;
