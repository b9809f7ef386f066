use serde::{Deserialize, Serialize};

use crate::device::{DeviceCategory, DeviceProfile};
use crate::instructions::{instructions_for, RecoveryInstructionSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Visibility of the location recovery dialog.
///
/// Written by the acquisition publisher (failure opens, success closes) and
/// by user actions (retry and dismiss close). Both writers live in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionDialog {
    state: DialogState,
}

impl PermissionDialog {
    #[must_use]
    pub const fn state(&self) -> DialogState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open)
    }

    pub(crate) fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub(crate) fn close(&mut self) {
        self.state = DialogState::Closed;
    }
}

/// Starts a new location acquisition attempt. Fire-and-forget: the outcome
/// comes back later through the location context.
pub trait AcquireLocation {
    fn request_location(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Retry,
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Dialog closed and one acquisition attempt issued.
    Retried,
    /// Dialog closed, nothing issued.
    Dismissed,
    /// Dialog was already closed; nothing happened.
    Ignored,
}

/// Handles user actions on the recovery dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecoveryController {
    profile: Option<DeviceProfile>,
}

impl RecoveryController {
    #[must_use]
    pub const fn new(profile: DeviceProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    /// Classifies the device for a fresh activation of the hosting view.
    pub fn activate(&mut self, user_agent: &str) -> DeviceCategory {
        let profile = DeviceProfile::detect(user_agent);
        self.profile = Some(profile);
        profile.category()
    }

    #[must_use]
    pub fn device(&self) -> DeviceCategory {
        self.profile
            .map_or(DeviceCategory::Desktop, |profile| profile.category())
    }

    #[must_use]
    pub fn instructions(&self) -> &'static RecoveryInstructionSet {
        instructions_for(self.device())
    }

    pub fn handle<A: AcquireLocation>(
        &self,
        action: UserAction,
        dialog: &mut PermissionDialog,
        acquirer: &mut A,
    ) -> ActionOutcome {
        match action {
            UserAction::Retry => self.retry(dialog, acquirer),
            UserAction::Dismiss => self.dismiss(dialog),
        }
    }

    /// Closes the dialog first, then issues exactly one new attempt.
    pub fn retry<A: AcquireLocation>(
        &self,
        dialog: &mut PermissionDialog,
        acquirer: &mut A,
    ) -> ActionOutcome {
        if !dialog.is_open() {
            return ActionOutcome::Ignored;
        }
        dialog.close();
        acquirer.request_location();
        ActionOutcome::Retried
    }

    pub fn dismiss(&self, dialog: &mut PermissionDialog) -> ActionOutcome {
        if !dialog.is_open() {
            return ActionOutcome::Ignored;
        }
        dialog.close();
        ActionOutcome::Dismissed
    }
}
