//! The slide-position state machine.

use tracing::debug;

use super::model::{Slide, SlideDeck};
use super::view::{CtaLabel, OnboardingViewState};

/// What a single advance step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward; `index` is the new current position.
    Moved { index: usize },
    /// Already on the last slide. The position did not change; this is
    /// the completion signal the navigation bridge turns into the
    /// terminal transition.
    Completed,
}

/// Tracks the current position in a fixed slide deck.
///
/// The position starts at zero and only [`advance`](Self::advance) moves
/// it, one slide at a time and never past the end, so it is a valid index
/// into the deck at all times.
#[derive(Debug, Clone)]
pub struct OnboardingFlow {
    deck: SlideDeck,
    position: usize,
}

impl OnboardingFlow {
    /// Start a flow at the first slide of `deck`.
    pub fn new(deck: SlideDeck) -> Self {
        Self { deck, position: 0 }
    }

    /// The slide at the current position.
    pub fn current(&self) -> &Slide {
        &self.deck.slides()[self.position]
    }

    /// True on the final slide, where the call-to-action flips to Start.
    pub fn is_last(&self) -> bool {
        self.position == self.deck.len() - 1
    }

    /// Move one slide forward, or report completion from the last slide.
    pub fn advance(&mut self) -> Advance {
        if self.is_last() {
            debug!(position = self.position, "Advance on last slide, completing");
            return Advance::Completed;
        }
        self.position += 1;
        debug!(position = self.position, "Advanced to next slide");
        Advance::Moved {
            index: self.position,
        }
    }

    /// Current position, also the index a pager scrolls to.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    /// Dot-indicator states, one per slide, `true` only at the current one.
    pub fn indicator_states(&self) -> Vec<bool> {
        (0..self.deck.len()).map(|i| i == self.position).collect()
    }

    /// Immutable snapshot of everything a rendering surface draws.
    pub fn view_state(&self) -> OnboardingViewState {
        let slide = self.current();
        OnboardingViewState {
            image: slide.image.clone(),
            title: slide.title.clone(),
            description: slide.description.clone(),
            dots: self.indicator_states(),
            cta: if self.is_last() {
                CtaLabel::Start
            } else {
                CtaLabel::Next
            },
        }
    }
}
