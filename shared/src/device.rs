use serde::{Deserialize, Serialize};
use std::fmt;

const IOS_MARKERS: &[&str] = &["iphone", "ipad", "ipod"];
const ANDROID_MARKER: &str = "android";

/// Device family used to pick the permission recovery steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    Ios,
    Android,
    #[default]
    Desktop,
}

impl DeviceCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Desktop => "desktop",
        }
    }

    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a user agent string. First match wins: iOS markers, then
/// Android, then desktop. Matching ignores ASCII case.
#[must_use]
pub fn classify(user_agent: &str) -> DeviceCategory {
    let ua = user_agent.to_ascii_lowercase();

    if IOS_MARKERS.iter().any(|marker| ua.contains(marker)) {
        DeviceCategory::Ios
    } else if ua.contains(ANDROID_MARKER) {
        DeviceCategory::Android
    } else {
        DeviceCategory::Desktop
    }
}

/// Classification cached for one activation of the hosting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    category: DeviceCategory,
}

impl DeviceProfile {
    #[must_use]
    pub fn detect(user_agent: &str) -> Self {
        Self {
            category: classify(user_agent),
        }
    }

    #[must_use]
    pub const fn category(&self) -> DeviceCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_iphone_user_agent() {
        assert_eq!(
            classify("Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X)"),
            DeviceCategory::Ios
        );
    }

    #[test]
    fn test_ipad_and_ipod() {
        assert_eq!(classify("Mozilla/5.0 (iPad; CPU OS 15_4 like Mac OS X)"), DeviceCategory::Ios);
        assert_eq!(classify("Mozilla/5.0 (iPod touch; CPU iPhone OS 12_0)"), DeviceCategory::Ios);
    }

    #[test]
    fn test_android_user_agent() {
        assert_eq!(
            classify("Mozilla/5.0 (Linux; Android 13; Pixel 7)"),
            DeviceCategory::Android
        );
    }

    #[test]
    fn test_desktop_user_agent() {
        assert_eq!(
            classify("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
            DeviceCategory::Desktop
        );
    }

    #[test]
    fn test_empty_and_garbage_fall_back_to_desktop() {
        assert_eq!(classify(""), DeviceCategory::Desktop);
        assert_eq!(classify("\u{0}\u{fffd}???"), DeviceCategory::Desktop);
    }

    #[test]
    fn test_ios_marker_wins_over_android() {
        assert_eq!(classify("Android iPhone hybrid"), DeviceCategory::Ios);
    }

    #[test]
    fn test_profile_caches_category() {
        let profile = DeviceProfile::detect("ANDROID");
        assert_eq!(profile.category(), DeviceCategory::Android);
        assert!(profile.category().is_mobile());
        assert!(!DeviceCategory::Desktop.is_mobile());
    }

    fn random_case(marker: &'static str) -> impl Strategy<Value = String> {
        proptest::collection::vec(any::<bool>(), marker.len()).prop_map(move |upper| {
            marker
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    // Filler that can never spell a marker by itself.
    fn filler() -> impl Strategy<Value = String> {
        "[0-9 ;/()._x-]{0,24}"
    }

    proptest! {
        #[test]
        fn ios_markers_classify_as_ios(
            prefix in filler(),
            suffix in filler(),
            marker in prop_oneof![random_case("iphone"), random_case("ipad"), random_case("ipod")],
        ) {
            let ua = format!("{prefix}{marker}{suffix}");
            prop_assert_eq!(classify(&ua), DeviceCategory::Ios);
        }

        #[test]
        fn android_marker_classifies_as_android(
            prefix in filler(),
            suffix in filler(),
            marker in random_case("android"),
        ) {
            let ua = format!("{prefix}{marker}{suffix}");
            prop_assert_eq!(classify(&ua), DeviceCategory::Android);
        }

        #[test]
        fn strings_without_markers_are_desktop(ua in ".*") {
            let lower = ua.to_ascii_lowercase();
            prop_assume!(!IOS_MARKERS.iter().any(|marker| lower.contains(marker)));
            prop_assume!(!lower.contains(ANDROID_MARKER));
            prop_assert_eq!(classify(&ua), DeviceCategory::Desktop);
        }

        #[test]
        fn marker_free_user_agents_are_desktop(
            platform in "(Windows NT 10\\.0|Macintosh; Intel Mac OS X 10_15|X11; Linux x86_64|X11; CrOS)",
            browser in "(Chrome|Firefox|Safari|Edg)/[0-9]{2,3}\\.[0-9]",
        ) {
            let ua = format!("Mozilla/5.0 ({platform}) {browser}");
            prop_assert_eq!(classify(&ua), DeviceCategory::Desktop);
        }

        #[test]
        fn classification_is_idempotent(ua in ".*") {
            prop_assert_eq!(classify(&ua), classify(&ua));
        }
    }
}
