//! Compiled-in resource tables.
//!
//! Maps every generated asset onto the path a native project expects it at.
//! The tables are the single source of truth for the native layout: the
//! native build tools read these exact file names, so entries are never
//! derived or deduplicated at runtime.
//!
//! Some targets intentionally repeat a source. Android serves the `mdpi`
//! images from both the unqualified bucket (`mipmap/`, `drawable/`) and the
//! explicit `-mdpi` bucket.

use std::fmt;

use serde::Serialize;

use crate::platform::Platform;

/// The role a deployed image plays in a native project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    /// iOS app icon (asset catalog `AppIcon`).
    IosIcon,
    /// iOS launch image.
    IosSplash,
    /// Android adaptive icon foreground layer.
    AndroidAdaptiveForeground,
    /// Android adaptive icon background layer.
    AndroidAdaptiveBackground,
    /// Android round launcher icon.
    AndroidRound,
    /// Android legacy (square) launcher icon.
    AndroidLegacy,
    /// Android splash screen.
    AndroidSplash,
    /// Android notification icon.
    AndroidPush,
}

impl ResourceCategory {
    /// Every category, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::IosIcon,
        Self::IosSplash,
        Self::AndroidAdaptiveForeground,
        Self::AndroidAdaptiveBackground,
        Self::AndroidRound,
        Self::AndroidLegacy,
        Self::AndroidSplash,
        Self::AndroidPush,
    ];

    /// Stable kebab-case identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::IosIcon => "ios-icon",
            Self::IosSplash => "ios-splash",
            Self::AndroidAdaptiveForeground => "android-adaptive-foreground",
            Self::AndroidAdaptiveBackground => "android-adaptive-background",
            Self::AndroidRound => "android-round",
            Self::AndroidLegacy => "android-legacy",
            Self::AndroidSplash => "android-splash",
            Self::AndroidPush => "android-push",
        }
    }

    /// The selection switch that enables this category.
    #[must_use]
    pub const fn kind(self) -> ResourceKind {
        match self {
            Self::IosIcon
            | Self::AndroidAdaptiveForeground
            | Self::AndroidAdaptiveBackground
            | Self::AndroidRound
            | Self::AndroidLegacy => ResourceKind::Icon,
            Self::IosSplash | Self::AndroidSplash => ResourceKind::Splash,
            Self::AndroidPush => ResourceKind::Push,
        }
    }

    /// The platform whose project consumes this category.
    #[must_use]
    pub const fn platform(self) -> Platform {
        match self {
            Self::IosIcon | Self::IosSplash => Platform::Ios,
            Self::AndroidAdaptiveForeground
            | Self::AndroidAdaptiveBackground
            | Self::AndroidRound
            | Self::AndroidLegacy
            | Self::AndroidSplash
            | Self::AndroidPush => Platform::Android,
        }
    }

    /// Look a category up by its [`id`](Self::id).
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Unit of enable/disable selection: icons, splash screens or push icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Launcher/app icons, including adaptive layers.
    Icon,
    /// Splash or launch screens.
    Splash,
    /// Notification icons.
    Push,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Icon => "icon",
            Self::Splash => "splash",
            Self::Push => "push",
        })
    }
}

/// One `(source, target)` pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// Role of the image.
    pub category: ResourceCategory,
    /// Path relative to the group's generated-assets directory.
    pub source: &'static str,
    /// Path relative to the group's project directory.
    pub target: &'static str,
}

impl ResourceEntry {
    const fn new(category: ResourceCategory, source: &'static str, target: &'static str) -> Self {
        Self {
            category,
            source,
            target,
        }
    }
}

/// A platform's batch of entries for one [`ResourceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceGroup {
    /// Selection switch for this batch.
    pub kind: ResourceKind,
    /// Directory under the generated-assets root holding the sources.
    pub source_dir: &'static str,
    /// Directory under the project root receiving the targets.
    pub target_dir: &'static str,
    /// Entries in deployment order.
    pub entries: &'static [ResourceEntry],
}

const IOS_APP_ICON_SET_PATH: &str = "HBuilder/Images.xcassets/AppIcon.appiconset";
const IOS_SPLASH_IMAGE_SET_PATH: &str = "HBuilder/Images.xcassets/LaunchStoryboard.imageset";
const ANDROID_RES_PATH: &str = "app/src/main/res";

use ResourceCategory::{
    AndroidAdaptiveBackground as Bg, AndroidAdaptiveForeground as Fg, AndroidLegacy as Legacy,
    AndroidPush as Push, AndroidRound as Round, AndroidSplash as Splash, IosIcon, IosSplash,
};

const IOS_ICONS: &[ResourceEntry] = &[
    ResourceEntry::new(IosIcon, "icon-20.png", "icon20.png"),
    ResourceEntry::new(IosIcon, "icon-29.png", "29x29.png"),
    ResourceEntry::new(IosIcon, "icon-40.png", "icon40.png"),
    ResourceEntry::new(IosIcon, "icon-29@2x.png", "icon58.png"),
    ResourceEntry::new(IosIcon, "icon-60.png", "icon60.png"),
    ResourceEntry::new(IosIcon, "icon-76.png", "icon76.png"),
    ResourceEntry::new(IosIcon, "icon-40@2x.png", "icon80.png"),
    ResourceEntry::new(IosIcon, "icon-29@3x.png", "icon87.png"),
    ResourceEntry::new(IosIcon, "icon-60@2x.png", "icon120.png"),
    ResourceEntry::new(IosIcon, "icon-76@2x.png", "icon152.png"),
    ResourceEntry::new(IosIcon, "icon-83.5@2x.png", "icon167.png"),
    ResourceEntry::new(IosIcon, "icon-60@3x.png", "icon180.png"),
    ResourceEntry::new(IosIcon, "icon-1024.png", "icon1024.png"),
];

const IOS_SPLASHES: &[ResourceEntry] = &[ResourceEntry::new(
    IosSplash,
    "Default@2x~universal~anyany.png",
    "Default@2x~universal~anyany.png",
)];

const ANDROID_ICONS: &[ResourceEntry] = &[
    ResourceEntry::new(Legacy, "drawable-mdpi-icon.png", "mipmap/ic_launcher.png"),
    ResourceEntry::new(Round, "drawable-mdpi-icon.png", "mipmap/ic_launcher_round.png"),
    ResourceEntry::new(Fg, "mipmap-mdpi-foreground.png", "mipmap/ic_launcher_foreground.png"),
    ResourceEntry::new(Bg, "mipmap-mdpi-background.png", "mipmap/ic_launcher_background.png"),
    ResourceEntry::new(Legacy, "drawable-mdpi-icon.png", "mipmap-mdpi/ic_launcher.png"),
    ResourceEntry::new(Round, "drawable-mdpi-icon.png", "mipmap-mdpi/ic_launcher_round.png"),
    ResourceEntry::new(Fg, "mipmap-mdpi-foreground.png", "mipmap-mdpi/ic_launcher_foreground.png"),
    ResourceEntry::new(Bg, "mipmap-mdpi-background.png", "mipmap-mdpi/ic_launcher_background.png"),
    ResourceEntry::new(Legacy, "drawable-hdpi-icon.png", "mipmap-hdpi/ic_launcher.png"),
    ResourceEntry::new(Round, "drawable-hdpi-icon.png", "mipmap-hdpi/ic_launcher_round.png"),
    ResourceEntry::new(Fg, "mipmap-hdpi-foreground.png", "mipmap-hdpi/ic_launcher_foreground.png"),
    ResourceEntry::new(Bg, "mipmap-hdpi-background.png", "mipmap-hdpi/ic_launcher_background.png"),
    ResourceEntry::new(Legacy, "drawable-xhdpi-icon.png", "mipmap-xhdpi/ic_launcher.png"),
    ResourceEntry::new(Round, "drawable-xhdpi-icon.png", "mipmap-xhdpi/ic_launcher_round.png"),
    ResourceEntry::new(Fg, "mipmap-xhdpi-foreground.png", "mipmap-xhdpi/ic_launcher_foreground.png"),
    ResourceEntry::new(Bg, "mipmap-xhdpi-background.png", "mipmap-xhdpi/ic_launcher_background.png"),
    ResourceEntry::new(Legacy, "drawable-xxhdpi-icon.png", "mipmap-xxhdpi/ic_launcher.png"),
    ResourceEntry::new(Round, "drawable-xxhdpi-icon.png", "mipmap-xxhdpi/ic_launcher_round.png"),
    ResourceEntry::new(Fg, "mipmap-xxhdpi-foreground.png", "mipmap-xxhdpi/ic_launcher_foreground.png"),
    ResourceEntry::new(Bg, "mipmap-xxhdpi-background.png", "mipmap-xxhdpi/ic_launcher_background.png"),
    ResourceEntry::new(Legacy, "drawable-xxxhdpi-icon.png", "mipmap-xxxhdpi/ic_launcher.png"),
    ResourceEntry::new(Round, "drawable-xxxhdpi-icon.png", "mipmap-xxxhdpi/ic_launcher_round.png"),
    ResourceEntry::new(Fg, "mipmap-xxxhdpi-foreground.png", "mipmap-xxxhdpi/ic_launcher_foreground.png"),
    ResourceEntry::new(Bg, "mipmap-xxxhdpi-background.png", "mipmap-xxxhdpi/ic_launcher_background.png"),
];

const ANDROID_SPLASHES: &[ResourceEntry] = &[
    ResourceEntry::new(Splash, "drawable-land-mdpi-screen.png", "drawable/splash.png"),
    ResourceEntry::new(Splash, "drawable-land-mdpi-screen.png", "drawable-land-mdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-land-hdpi-screen.png", "drawable-land-hdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-land-xhdpi-screen.png", "drawable-land-xhdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-land-xxhdpi-screen.png", "drawable-land-xxhdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-land-xxxhdpi-screen.png", "drawable-land-xxxhdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-port-mdpi-screen.png", "drawable-port-mdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-port-hdpi-screen.png", "drawable-port-hdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-port-xhdpi-screen.png", "drawable-port-xhdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-port-xxhdpi-screen.png", "drawable-port-xxhdpi/splash.png"),
    ResourceEntry::new(Splash, "drawable-port-xxxhdpi-screen.png", "drawable-port-xxxhdpi/splash.png"),
];

const ANDROID_PUSHES: &[ResourceEntry] = &[
    ResourceEntry::new(Push, "drawable-mdpi-push.png", "drawable/push.png"),
    ResourceEntry::new(Push, "drawable-mdpi-push.png", "drawable-mdpi/push.png"),
    ResourceEntry::new(Push, "drawable-hdpi-push.png", "drawable-hdpi/push.png"),
    ResourceEntry::new(Push, "drawable-xhdpi-push.png", "drawable-xhdpi/push.png"),
    ResourceEntry::new(Push, "drawable-xxhdpi-push.png", "drawable-xxhdpi/push.png"),
    ResourceEntry::new(Push, "drawable-xxxhdpi-push.png", "drawable-xxxhdpi/push.png"),
];

const IOS_GROUPS: &[ResourceGroup] = &[
    ResourceGroup {
        kind: ResourceKind::Icon,
        source_dir: "ios/icon",
        target_dir: IOS_APP_ICON_SET_PATH,
        entries: IOS_ICONS,
    },
    ResourceGroup {
        kind: ResourceKind::Splash,
        source_dir: "ios/splash",
        target_dir: IOS_SPLASH_IMAGE_SET_PATH,
        entries: IOS_SPLASHES,
    },
];

const ANDROID_GROUPS: &[ResourceGroup] = &[
    ResourceGroup {
        kind: ResourceKind::Icon,
        source_dir: "android/icon",
        target_dir: ANDROID_RES_PATH,
        entries: ANDROID_ICONS,
    },
    ResourceGroup {
        kind: ResourceKind::Splash,
        source_dir: "android/splash",
        target_dir: ANDROID_RES_PATH,
        entries: ANDROID_SPLASHES,
    },
    ResourceGroup {
        kind: ResourceKind::Push,
        source_dir: "android/push",
        target_dir: ANDROID_RES_PATH,
        entries: ANDROID_PUSHES,
    },
];

/// Deployable groups for `platform`, ordered icon, splash, push.
///
/// Empty for platforms without a native project layout.
#[must_use]
pub const fn groups(platform: Platform) -> &'static [ResourceGroup] {
    match platform {
        Platform::Ios => IOS_GROUPS,
        Platform::Android => ANDROID_GROUPS,
        Platform::Windows => &[],
    }
}

/// The group of `kind` for `platform`, if the platform defines one.
#[must_use]
pub fn group(platform: Platform, kind: ResourceKind) -> Option<&'static ResourceGroup> {
    groups(platform).iter().find(|g| g.kind == kind)
}

/// All entries of `category` for `platform`, in catalog order.
///
/// A category the platform does not define yields an empty vector.
#[must_use]
pub fn entries(platform: Platform, category: ResourceCategory) -> Vec<&'static ResourceEntry> {
    if category.platform() != platform {
        return Vec::new();
    }
    group(platform, category.kind())
        .map(|g| g.entries)
        .unwrap_or_default()
        .iter()
        .filter(|e| e.category == category)
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn targets(platform: Platform) -> Vec<String> {
        groups(platform)
            .iter()
            .flat_map(|g| g.entries.iter().map(move |e| format!("{}/{}", g.target_dir, e.target)))
            .collect()
    }

    #[test]
    fn ios_group_sizes() {
        assert_eq!(group(Platform::Ios, ResourceKind::Icon).unwrap().entries.len(), 13);
        assert_eq!(group(Platform::Ios, ResourceKind::Splash).unwrap().entries.len(), 1);
        assert!(group(Platform::Ios, ResourceKind::Push).is_none());
    }

    #[test]
    fn android_group_sizes() {
        assert_eq!(group(Platform::Android, ResourceKind::Icon).unwrap().entries.len(), 24);
        assert_eq!(group(Platform::Android, ResourceKind::Splash).unwrap().entries.len(), 11);
        assert_eq!(group(Platform::Android, ResourceKind::Push).unwrap().entries.len(), 6);
    }

    #[test]
    fn groups_are_ordered_icon_splash_push() {
        let kinds: Vec<ResourceKind> = groups(Platform::Android).iter().map(|g| g.kind).collect();
        assert_eq!(kinds, [ResourceKind::Icon, ResourceKind::Splash, ResourceKind::Push]);
    }

    #[test]
    fn windows_has_no_groups() {
        assert!(groups(Platform::Windows).is_empty());
        assert!(entries(Platform::Windows, IosIcon).is_empty());
    }

    #[test]
    fn no_target_collisions_within_a_platform() {
        for platform in [Platform::Ios, Platform::Android] {
            let all = targets(platform);
            let unique: HashSet<&String> = all.iter().collect();
            assert_eq!(unique.len(), all.len(), "duplicate target on {platform}");
        }
    }

    #[test]
    fn ios_icon_pixel_sizes() {
        let names: Vec<&str> = entries(Platform::Ios, IosIcon)
            .iter()
            .map(|e| e.target)
            .collect();
        for px in [20, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024] {
            let expected = format!("icon{px}.png");
            assert!(names.contains(&expected.as_str()), "missing {expected}");
        }
        assert!(names.contains(&"29x29.png"));
    }

    #[test]
    fn android_icon_categories_cover_default_and_five_densities() {
        for category in [
            ResourceCategory::AndroidLegacy,
            ResourceCategory::AndroidRound,
            ResourceCategory::AndroidAdaptiveForeground,
            ResourceCategory::AndroidAdaptiveBackground,
        ] {
            let dirs: Vec<&str> = entries(Platform::Android, category)
                .iter()
                .map(|e| e.target.split('/').next().unwrap())
                .collect();
            assert_eq!(
                dirs,
                [
                    "mipmap",
                    "mipmap-mdpi",
                    "mipmap-hdpi",
                    "mipmap-xhdpi",
                    "mipmap-xxhdpi",
                    "mipmap-xxxhdpi"
                ],
                "{category}"
            );
        }
    }

    #[test]
    fn default_buckets_share_the_mdpi_source() {
        let legacy = entries(Platform::Android, ResourceCategory::AndroidLegacy);
        assert_eq!(legacy[0].source, legacy[1].source);
        let push = entries(Platform::Android, ResourceCategory::AndroidPush);
        assert_eq!(push[0].target, "drawable/push.png");
        assert_eq!(push[0].source, push[1].source);
    }

    #[test]
    fn splash_has_unqualified_plus_land_and_port() {
        let splash = entries(Platform::Android, ResourceCategory::AndroidSplash);
        assert_eq!(splash[0].target, "drawable/splash.png");
        let land = splash.iter().filter(|e| e.target.starts_with("drawable-land-")).count();
        let port = splash.iter().filter(|e| e.target.starts_with("drawable-port-")).count();
        assert_eq!((land, port), (5, 5));
    }

    #[test]
    fn every_entry_lives_in_a_group_of_its_kind_and_platform() {
        for platform in Platform::ALL {
            for g in groups(platform) {
                for e in g.entries {
                    assert_eq!(e.category.kind(), g.kind);
                    assert_eq!(e.category.platform(), platform);
                }
            }
        }
    }

    #[test]
    fn foreign_category_yields_empty() {
        assert!(entries(Platform::Ios, ResourceCategory::AndroidPush).is_empty());
        assert!(entries(Platform::Android, IosSplash).is_empty());
    }

    #[test]
    fn category_ids_round_trip() {
        for category in ResourceCategory::ALL {
            assert_eq!(ResourceCategory::from_id(category.id()), Some(category));
        }
        assert_eq!(ResourceCategory::from_id("android-banner"), None);
    }
}
