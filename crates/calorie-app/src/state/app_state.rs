use crate::state::{Navigation, Settings};

// AppState holds the screen stack and settings. Only settings are persisted.
#[derive(Debug, Default)]
pub(crate) struct AppState {
    pub(crate) navigation: Navigation,
    settings: Settings,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            navigation: Navigation::new(),
            settings,
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn set_settings(&mut self, settings: Settings) {
        if self.settings != settings {
            self.settings = settings;
            self.dirty = true;
        }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
