//! Wallpaper settings models.

use serde::{Deserialize, Serialize};

/// Which icon artwork set the wallpaper draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPack {
    #[default]
    Classic,
    Outline,
    Neon,
}

impl std::fmt::Display for IconPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Classic => "classic",
            Self::Outline => "outline",
            Self::Neon => "neon",
        };
        write!(f, "{s}")
    }
}

/// Settings the settings screen exposes.
///
/// `icon_pack` and `animated_icons` are icon-affecting: changing either
/// raises the shared icons-changed signal so the home screen rebuilds its
/// icon state. `double_tap_cycle` is a gesture toggle and touches no icon
/// assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSettings {
    #[serde(default)]
    pub icon_pack: IconPack,
    #[serde(default = "default_animated_icons")]
    pub animated_icons: bool,
    #[serde(default)]
    pub double_tap_cycle: bool,
}

fn default_animated_icons() -> bool {
    true
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            icon_pack: IconPack::default(),
            animated_icons: true,
            double_tap_cycle: false,
        }
    }
}
