use serde::{Deserialize, Serialize};

use crate::device::DeviceCategory;
use crate::instructions::{HeaderIcon, RecoveryInstructionSet};
use crate::location::LocationStatus;

pub const MODAL_TITLE: &str = "Location access needed";
pub const MODAL_DESCRIPTION: &str =
    "Your report needs your location. Allow location access in your browser, then try again.";
pub const RETRY_LABEL: &str = "Try again";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationModalView {
    pub open: bool,
    pub title: String,
    pub description: String,
    pub header_label: String,
    pub header_icon: HeaderIcon,
    pub steps: Vec<String>,
    pub retry_label: String,
}

impl LocationModalView {
    #[must_use]
    pub fn new(open: bool, instructions: &RecoveryInstructionSet) -> Self {
        Self {
            open,
            title: MODAL_TITLE.into(),
            description: MODAL_DESCRIPTION.into(),
            header_label: instructions.header_label.into(),
            header_icon: instructions.header_icon,
            steps: instructions.steps.iter().map(|step| (*step).to_string()).collect(),
            retry_label: RETRY_LABEL.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationStatusView {
    Idle,
    Locating,
    Located {
        lat: f64,
        lng: f64,
        accuracy_m: Option<f64>,
    },
    Failed {
        code: String,
        message: String,
    },
}

impl From<&LocationStatus> for LocationStatusView {
    fn from(status: &LocationStatus) -> Self {
        match status {
            LocationStatus::Idle => Self::Idle,
            LocationStatus::Locating => Self::Locating,
            LocationStatus::Located { position } => Self::Located {
                lat: position.lat,
                lng: position.lng,
                accuracy_m: position.accuracy_m,
            },
            LocationStatus::Failed { error } => Self::Failed {
                code: error.code().into(),
                message: error.user_facing_message().into(),
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub device: DeviceCategory,
    pub modal: LocationModalView,
    pub location: LocationStatusView,
}
