use serde::{Deserialize, Serialize};

use crate::device::DeviceCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderIcon {
    Smartphone,
    Monitor,
}

/// Ordered steps that walk the user through re-granting location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryInstructionSet {
    pub category: DeviceCategory,
    pub header_label: &'static str,
    pub header_icon: HeaderIcon,
    pub steps: &'static [&'static str],
}

impl RecoveryInstructionSet {
    #[must_use]
    pub const fn step_count(&self) -> usize {
        self.steps.len()
    }
}

const DESKTOP_INSTRUCTIONS: RecoveryInstructionSet = RecoveryInstructionSet {
    category: DeviceCategory::Desktop,
    header_label: "Browser",
    header_icon: HeaderIcon::Monitor,
    steps: &[
        "Click the lock icon in the address bar.",
        "Switch the \"Location\" toggle on.",
        "Reload the page.",
    ],
};

// Adding a device category means adding a row here; lookup stays the same.
static INSTRUCTION_TABLE: &[RecoveryInstructionSet] = &[
    RecoveryInstructionSet {
        category: DeviceCategory::Ios,
        header_label: "iPhone (browser)",
        header_icon: HeaderIcon::Smartphone,
        steps: &[
            "Tap the \"aA\" page settings button in the address bar.",
            "Open \"Website Settings\" and find \"Location\".",
            "Set Location to \"Allow\".",
            "Reload the page.",
        ],
    },
    RecoveryInstructionSet {
        category: DeviceCategory::Android,
        header_label: "Android (browser)",
        header_icon: HeaderIcon::Smartphone,
        steps: &[
            "Tap the lock icon next to the address bar.",
            "Open \"Permissions\".",
            "Turn on \"Location\".",
            "Still blocked? Tap \"Reset permissions\" and try again.",
        ],
    },
    DESKTOP_INSTRUCTIONS,
];

/// Looks up the recovery steps for `category`. Falls back to the desktop
/// row, which only references the generic address bar lock icon.
#[must_use]
pub fn instructions_for(category: DeviceCategory) -> &'static RecoveryInstructionSet {
    INSTRUCTION_TABLE
        .iter()
        .find(|set| set.category == category)
        .unwrap_or(&DESKTOP_INSTRUCTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_a_row() {
        for category in [DeviceCategory::Ios, DeviceCategory::Android, DeviceCategory::Desktop] {
            assert_eq!(instructions_for(category).category, category);
        }
    }

    #[test]
    fn test_ios_instructions() {
        let set = instructions_for(DeviceCategory::Ios);
        assert_eq!(set.header_label, "iPhone (browser)");
        assert_eq!(set.header_icon, HeaderIcon::Smartphone);
        assert_eq!(set.step_count(), 4);
        assert!(set.steps[2].contains("Allow"));
        assert!(set.steps[3].contains("Reload"));
    }

    #[test]
    fn test_android_instructions() {
        let set = instructions_for(DeviceCategory::Android);
        assert_eq!(set.header_label, "Android (browser)");
        assert_eq!(set.step_count(), 4);
        assert!(set.steps[1].contains("Permissions"));
        assert!(set.steps[3].contains("Reset permissions"));
    }

    #[test]
    fn test_desktop_instructions() {
        let set = instructions_for(DeviceCategory::Desktop);
        assert_eq!(set.header_label, "Browser");
        assert_eq!(set.header_icon, HeaderIcon::Monitor);
        assert_eq!(set.step_count(), 3);
        assert!(set.steps[0].contains("lock icon"));
    }

    #[test]
    fn test_table_has_one_row_per_category() {
        let categories: HashSet<_> = INSTRUCTION_TABLE.iter().map(|s| s.category).collect();
        assert_eq!(categories.len(), INSTRUCTION_TABLE.len());
    }
}
