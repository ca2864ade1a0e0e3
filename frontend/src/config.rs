use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::DashboardError;

pub const DEFAULT_SYSTEM_NAME: &str = "EduBook Admin";

/// Runtime knobs for the dashboard. Every field has a default so a partial
/// override object is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub system_name: String,
    pub notification_ttl_ms: u64,
    pub activity_interval_ms: u64,
    pub activity_feed_capacity: usize,
    pub count_up_duration_ms: u64,
    pub table_load_delay_ms: u64,
    pub filter_delay_ms: u64,
    pub report_delay_ms: u64,
    pub template_navigation_delay_ms: u64,
    pub utilization_percent: u8,
    pub nav_breakpoint_px: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            system_name: DEFAULT_SYSTEM_NAME.to_string(),
            notification_ttl_ms: 3_000,
            activity_interval_ms: 30_000,
            activity_feed_capacity: 5,
            count_up_duration_ms: 1_000,
            table_load_delay_ms: 1_000,
            filter_delay_ms: 1_000,
            report_delay_ms: 2_000,
            template_navigation_delay_ms: 500,
            utilization_percent: 78,
            nav_breakpoint_px: 768,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, DashboardError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    fn validated(self) -> Result<Self, DashboardError> {
        if self.activity_feed_capacity == 0 {
            return Err(DashboardError::InvalidConfig(
                "activity_feed_capacity must be at least 1".into(),
            ));
        }
        if self.utilization_percent > 100 {
            return Err(DashboardError::InvalidConfig(format!(
                "utilization_percent out of range: {}",
                self.utilization_percent
            )));
        }
        Ok(self)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    pub fn activity_interval(&self) -> Duration {
        Duration::from_millis(self.activity_interval_ms)
    }

    pub fn count_up_duration(&self) -> Duration {
        Duration::from_millis(self.count_up_duration_ms)
    }

    pub fn table_load_delay(&self) -> Duration {
        Duration::from_millis(self.table_load_delay_ms)
    }

    pub fn filter_delay(&self) -> Duration {
        Duration::from_millis(self.filter_delay_ms)
    }

    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }

    pub fn template_navigation_delay(&self) -> Duration {
        Duration::from_millis(self.template_navigation_delay_ms)
    }

    /// Reads `window.__EDUBOOK_CONFIG` when present, otherwise defaults.
    pub fn load() -> Self {
        match snapshot_from_globals() {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("Ignoring runtime config override: {}", err);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // Expect optional global object: window.__EDUBOOK_CONFIG = { notification_ttl_ms: 3000, ... }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__EDUBOOK_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn reads_override_from_window_global() {
        let window = web_sys::window().unwrap();
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"nav_breakpoint_px".into(), &1024.into()).unwrap();
        js_sys::Reflect::set(&window, &"__EDUBOOK_CONFIG".into(), &obj).unwrap();

        let cfg = DashboardConfig::load();
        assert_eq!(cfg.nav_breakpoint_px, 1024);
        assert_eq!(cfg.notification_ttl_ms, 3000);

        js_sys::Reflect::delete_property(&window, &"__EDUBOOK_CONFIG".into()).unwrap();
    }
}
