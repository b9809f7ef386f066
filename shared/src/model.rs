use crate::capabilities::AcquisitionOptions;
use crate::location::LocationContext;
use crate::recovery::{PermissionDialog, RecoveryController};

/// App state. The dialog and the location context are separate fields so the
/// controller and the acquisition publisher can each borrow what they write.
#[derive(Debug, Default)]
pub struct Model {
    pub controller: RecoveryController,
    pub dialog: PermissionDialog,
    pub location: LocationContext,
    pub options: AcquisitionOptions,
}

impl Model {
    #[must_use]
    pub const fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }
}
