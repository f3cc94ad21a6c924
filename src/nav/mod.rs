//! Navigation — routes, the host seam, a back-stack navigator, and the
//! bridge that drives the onboarding flow's terminal transition.

pub mod bridge;
pub mod host;
pub mod route;
pub mod stack;

pub use bridge::{AdvanceOutcome, NavigationBridge};
pub use host::{NavOptions, NavigationHost};
pub use route::Route;
pub use stack::BackStackNavigator;
