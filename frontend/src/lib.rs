pub mod components;
pub mod config;
pub mod entry;
pub mod error;
pub mod model;
pub mod pages;
pub mod router;
pub mod state;
pub mod templates;
#[cfg(test)]
pub mod test_support;
pub mod utils;

/// Browser entry point: installs the panic hook and logger, then mounts the
/// routed application on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::info!("Starting {} frontend", config::DEFAULT_SYSTEM_NAME);
    router::mount_app();
}
