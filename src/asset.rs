//! Target manifest for the placeholder assets.
//!
//! The four output files are fixed; nothing here is configurable.

use std::fmt::{self, Display, Formatter};

/// One of the four placeholder assets this tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Application icon (`icon.png`)
    Icon,
    /// Android adaptive icon (`adaptive-icon.png`)
    AdaptiveIcon,
    /// Web favicon (`favicon.png`)
    Favicon,
    /// Splash screen image (`splash-icon.png`)
    SplashIcon,
}

impl AssetKind {
    /// All assets, in write order.
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Icon,
        AssetKind::AdaptiveIcon,
        AssetKind::Favicon,
        AssetKind::SplashIcon,
    ];

    /// File name the asset is written to, relative to the working directory.
    #[inline]
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Icon => "icon.png",
            Self::AdaptiveIcon => "adaptive-icon.png",
            Self::Favicon => "favicon.png",
            Self::SplashIcon => "splash-icon.png",
        }
    }
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
