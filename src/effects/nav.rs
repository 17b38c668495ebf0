use crate::config::NavSettings;

/// Whether the navigation bar has switched to its compact, opaque style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
}

impl NavState {
    pub fn from_scroll(scroll_y: f64, settings: &NavSettings) -> Self {
        Self {
            scrolled: scroll_y > settings.scroll_threshold,
        }
    }

    pub fn is_scrolled(self) -> bool {
        self.scrolled
    }

    pub fn classes(self) -> &'static str {
        if self.scrolled {
            "bg-neutral-950/90 backdrop-blur-md border-neutral-800 py-3 shadow-lg shadow-amber-900/5"
        } else {
            "bg-transparent border-transparent py-6"
        }
    }
}
