use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) error_dismiss_delay: ErrorDismissDelay,
    pub(crate) greeting_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            error_dismiss_delay: ErrorDismissDelay::default(),
            greeting_name: "Android".to_owned(),
        }
    }
}

/// How long a validation error stays visible before it clears itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum ErrorDismissDelay {
    #[default]
    ThreeSeconds,
    FiveSeconds,
}

impl ErrorDismissDelay {
    pub(crate) const ALL: [Self; 2] = [Self::ThreeSeconds, Self::FiveSeconds];

    #[must_use]
    pub(crate) const fn duration(self) -> Duration {
        match self {
            Self::ThreeSeconds => Duration::from_secs(3),
            Self::FiveSeconds => Duration::from_secs(5),
        }
    }

    #[must_use]
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::ThreeSeconds => "3 seconds",
            Self::FiveSeconds => "5 seconds",
        }
    }
}
