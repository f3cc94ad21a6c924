//! Navigation destinations.

use serde::{Deserialize, Serialize};

/// The closed set of destinations in the shell's navigation graph.
///
/// Routes carry no parameters and compare by identifier. Keeping the set a
/// plain enum means every navigation match is checked for exhaustiveness at
/// compile time — adding a destination breaks the build until each handler
/// knows about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Launch placeholder; pruned as soon as the shell resolves a target.
    Splash,
    /// First-run slide deck.
    Onboarding,
    /// The main wallpaper screen.
    Home,
    /// Wallpaper settings.
    Settings,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Splash => "splash",
            Self::Onboarding => "onboarding",
            Self::Home => "home",
            Self::Settings => "settings",
        };
        write!(f, "{s}")
    }
}
