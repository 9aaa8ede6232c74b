//! Page-level visual effects.
//!
//! Two browser-level subscriptions drive everything: the window scroll
//! stream (navbar styling) and a shared viewport-intersection watcher
//! (reveal-on-scroll). Both are acquired once when the page mounts and
//! released once on teardown.

mod scroll;
mod viewport;

pub use scroll::{past_threshold, NAV_SCROLL_THRESHOLD_PX};
pub use viewport::{drive_viewport, release_viewport, ViewportEvent};
