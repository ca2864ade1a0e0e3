use leptos::*;

/// Mobile navigation menu. The header carries `nav-open` while it is shown.
#[derive(Clone, Copy)]
pub struct NavState {
    open: RwSignal<bool>,
    breakpoint_px: u32,
}

impl NavState {
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            open: create_rw_signal(false),
            breakpoint_px,
        }
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Widths above the breakpoint are desktop layouts, where the menu is
    /// always collapsed.
    pub fn handle_resize(&self, width: f64) {
        if width > f64::from(self.breakpoint_px) {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.open.get_untracked()
    }

    pub fn header_class(&self) -> &'static str {
        if self.is_open() {
            "header nav-open"
        } else {
            "header"
        }
    }
}
