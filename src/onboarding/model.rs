//! Slide deck and persisted first-run models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FlowError;

/// One onboarding slide. Immutable once the deck is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Asset reference for the illustration.
    pub image: String,
    pub title: String,
    pub description: String,
}

impl Slide {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Ordered, fixed set of slides. Guaranteed non-empty by construction.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Build a deck from `slides`. An empty list is rejected so that a
    /// flow always has a current slide.
    pub fn new(slides: Vec<Slide>) -> Result<Self, FlowError> {
        if slides.is_empty() {
            return Err(FlowError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

/// The deck the wallpaper ships with.
pub fn default_deck() -> SlideDeck {
    SlideDeck {
        slides: vec![
            Slide::new(
                "slides/welcome.png",
                "Welcome to Wallflow",
                "A living wallpaper that keeps your home screen in motion.",
            ),
            Slide::new(
                "slides/styles.png",
                "Pick your style",
                "Three icon packs, animated or still. Change them any time in settings.",
            ),
            Slide::new(
                "slides/apply.png",
                "Set and forget",
                "Apply once. The wallpaper follows your settings from then on.",
            ),
        ],
    }
}

/// Persisted record of whether the first-run flow has been completed.
///
/// Launch routing reads this: `completed == false` sends the session to
/// onboarding, `true` straight to home.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    pub completed: bool,
    /// When the terminal transition was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
