//! Settings — the wallpaper settings model and its screen collaborator.

pub mod controller;
pub mod model;

pub use controller::SettingsController;
pub use model::{IconPack, ShellSettings};
