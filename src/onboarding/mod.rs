//! Onboarding system — the first-run slide flow.
//!
//! A fixed, non-empty deck of slides is walked one advance at a time by
//! [`OnboardingFlow`]. Completion is not a flow state: advancing from the
//! last slide reports [`Advance::Completed`], and the navigation bridge
//! turns that into the terminal transition to home.

pub mod flow;
pub mod model;
pub mod view;

pub use flow::{Advance, OnboardingFlow};
pub use model::{OnboardingRecord, Slide, SlideDeck, default_deck};
pub use view::{CtaLabel, OnboardingViewState};
