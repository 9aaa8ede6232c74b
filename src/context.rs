//! Page-level state shared through context.
//!
//! The application root owns the two pieces of scroll-driven state and
//! provides them to the section components via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In a section component
//! let reveals = use_reveals();
//! let active = reveals().is_revealed("about-story");
//! ```

use dioxus::prelude::*;
use portfolio_ui::RevealRegistry;

/// Hook to read the navbar scroll flag.
///
/// True once the viewport has scrolled past the navbar threshold;
/// written only by the viewport bridge.
pub fn use_scrolled() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to read the shared reveal registry.
///
/// Seeded with every reveal-tagged element at mount; entries flip to
/// revealed as the intersection watcher reports them.
pub fn use_reveals() -> Signal<RevealRegistry> {
    use_context::<Signal<RevealRegistry>>()
}
