use std::sync::atomic::{AtomicBool, Ordering};

/// Events that can close the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSignal {
    /// The clear button: also empties and refocuses the search input.
    Clear,
    Escape,
    /// A click somewhere on the page.
    Click {
        inside_search: bool,
        inside_panel: bool,
    },
}

/// Visibility of the results panel.
#[derive(Debug, Default)]
pub struct ResultsPanel {
    visible: AtomicBool,
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    pub fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    pub fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    /// Whether `signal` closes the panel in its current state.
    pub fn should_dismiss(&self, signal: DismissSignal) -> bool {
        match signal {
            DismissSignal::Clear | DismissSignal::Escape => true,
            DismissSignal::Click {
                inside_search,
                inside_panel,
            } => !inside_search && !inside_panel && self.is_visible(),
        }
    }
}
