//! Immutable view state handed to a rendering surface.

use serde::Serialize;

/// Label of the advance control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaLabel {
    /// More slides remain.
    Next,
    /// Final slide; the next tap fires the terminal transition.
    Start,
}

impl std::fmt::Display for CtaLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Next => "Next",
            Self::Start => "Start",
        };
        write!(f, "{s}")
    }
}

/// Everything a surface needs to draw one onboarding step.
///
/// Snapshots are detached from the flow: mutating the flow afterwards does
/// not change a snapshot already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingViewState {
    pub image: String,
    pub title: String,
    pub description: String,
    /// One entry per slide, `true` only at the current position.
    pub dots: Vec<bool>,
    pub cta: CtaLabel,
}
