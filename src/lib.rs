//! Wallflow — headless UI-flow core for a live-wallpaper app.
//!
//! Onboarding pager flow, back-stack navigation, a replay-latest shared
//! signal, and the persisted preferences that drive launch routing. A
//! rendering surface consumes immutable view state and feeds intent events
//! back in; this crate never draws anything itself.

pub mod config;
pub mod error;
pub mod nav;
pub mod onboarding;
pub mod settings;
pub mod shell;
pub mod signal;
pub mod store;
