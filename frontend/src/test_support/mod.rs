#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::{
        config::DashboardConfig, state::controller::DashboardController,
        utils::scheduler::Scheduler,
    };

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = leptos::create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    /// Controller with default settings on a fresh virtual clock. Must be
    /// called inside a reactive runtime.
    pub fn test_controller() -> DashboardController {
        DashboardController::new(DashboardConfig::default(), Scheduler::new())
    }
}
