//! Root application component.

use dioxus::prelude::*;
use portfolio_ui::RevealRegistry;

use crate::content;
use crate::effects::{drive_viewport, release_viewport};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application root.
///
/// Owns the two pieces of scroll-driven page state and the viewport
/// subscription lifecycle: both browser-level subscriptions are
/// acquired once after the first render lands in the DOM and released
/// once on teardown, whatever path unmounts the root.
#[component]
pub fn App() -> Element {
    let scrolled: Signal<bool> = use_signal(|| false);
    let reveals: Signal<RevealRegistry> =
        use_signal(|| RevealRegistry::with_ids(content::reveal_ids()));

    // Provide page state to the section components
    use_context_provider(|| scrolled);
    use_context_provider(|| reveals);

    // Acquire the scroll stream and the intersection watcher; the
    // receive loop exits when the release event arrives.
    use_effect(move || {
        spawn(async move {
            drive_viewport(scrolled, reveals).await;
        });
    });

    // Release unconditionally on teardown, including abnormal unmount.
    use_drop(release_viewport);

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
