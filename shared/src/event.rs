use serde::{Deserialize, Serialize};

use crate::capabilities::AcquisitionOptions;
use crate::location::{AttemptEpoch, GeolocationResult};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum Event {
    #[default]
    Noop,

    /// The hosting view became active. Carries the browser user agent.
    Activated {
        user_agent: String,
    },

    LocationRequested,
    LocationResolved {
        epoch: AttemptEpoch,
        result: GeolocationResult,
    },

    RetryPressed,
    DialogDismissed,

    AcquisitionOptionsChanged(AcquisitionOptions),
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Activated { .. } => "activated",
            Self::LocationRequested => "location_requested",
            Self::LocationResolved { .. } => "location_resolved",
            Self::RetryPressed => "retry_pressed",
            Self::DialogDismissed => "dialog_dismissed",
            Self::AcquisitionOptionsChanged(_) => "acquisition_options_changed",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(self, Self::RetryPressed | Self::DialogDismissed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationError;

    #[test]
    fn user_actions_are_flagged() {
        assert!(Event::RetryPressed.is_user_initiated());
        assert!(Event::DialogDismissed.is_user_initiated());
        assert!(!Event::LocationRequested.is_user_initiated());
        assert!(!Event::LocationResolved {
            epoch: AttemptEpoch(1),
            result: Err(LocationError::Timeout),
        }
        .is_user_initiated());
    }

    #[test]
    fn event_names_are_snake_case() {
        let events = [
            Event::Noop,
            Event::Activated { user_agent: String::new() },
            Event::LocationRequested,
            Event::RetryPressed,
            Event::DialogDismissed,
            Event::AcquisitionOptionsChanged(AcquisitionOptions::default()),
        ];
        for event in &events {
            let name = event.name();
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'), "{name}");
        }
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = Event::LocationResolved {
            epoch: AttemptEpoch(3),
            result: Err(LocationError::PermissionDenied),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
