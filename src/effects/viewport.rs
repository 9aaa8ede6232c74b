//! Webview viewport bridge.
//!
//! One evaluated script owns both browser-level subscriptions: a
//! passive window scroll listener and a single `IntersectionObserver`
//! fanning out over every `[data-reveal]` element. Events stream back
//! over the script's channel as typed [`ViewportEvent`] payloads.
//!
//! The lifecycle is symmetric: [`drive_viewport`] installs the
//! subscriptions and pumps events; [`release_viewport`] removes the
//! listener, disconnects the observer, and emits the terminal
//! `released` event so the receive loop exits. The installed handle
//! lives at `window.__portfolioViewport`, which also guards against
//! double installation.
//!
//! A webview without `IntersectionObserver` installs only the scroll
//! listener; sections then simply never animate.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_ui::RevealRegistry;
use serde::Deserialize;

use super::scroll::past_threshold;

/// Installs the scroll listener and the shared intersection watcher,
/// and reports the initial scroll offset.
pub const INSTALL_VIEWPORT_JS: &str = r#"
(function () {
  if (window.__portfolioViewport) { return; }
  var fx = {};

  fx.onScroll = function () {
    dioxus.send({ kind: "scroll", offset: window.scrollY });
  };
  window.addEventListener("scroll", fx.onScroll, { passive: true });

  if (typeof IntersectionObserver !== "undefined") {
    fx.observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        dioxus.send({
          kind: "reveal",
          id: entry.target.getAttribute("data-reveal") || "",
          visible: entry.isIntersecting
        });
      });
    }, { root: null, rootMargin: "0px", threshold: 0.1 });

    document.querySelectorAll("[data-reveal]").forEach(function (el) {
      fx.observer.observe(el);
    });
  }

  fx.release = function () {
    window.removeEventListener("scroll", fx.onScroll);
    if (fx.observer) { fx.observer.disconnect(); }
    delete window.__portfolioViewport;
    dioxus.send({ kind: "released" });
  };

  window.__portfolioViewport = fx;
  fx.onScroll();
})();
"#;

/// Tears down everything the install script registered.
pub const RELEASE_VIEWPORT_JS: &str = r#"
(function () {
  if (window.__portfolioViewport) {
    window.__portfolioViewport.release();
  }
})();
"#;

/// Event sent from the webview over the bridge channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewportEvent {
    /// Vertical scroll offset report.
    Scroll { offset: f64 },
    /// Visibility report for one reveal-tagged element.
    Reveal { id: String, visible: bool },
    /// The subscriptions were released; no further events follow.
    Released,
}

/// Install the viewport subscriptions and pump events until released.
///
/// Writes are change-gated so a scroll event per frame does not
/// re-render the page when nothing flipped.
pub async fn drive_viewport(mut scrolled: Signal<bool>, mut reveals: Signal<RevealRegistry>) {
    let mut channel = document::eval(INSTALL_VIEWPORT_JS);
    tracing::debug!("viewport subscriptions installed");

    loop {
        match channel.recv::<ViewportEvent>().await {
            Ok(ViewportEvent::Scroll { offset }) => {
                let past = past_threshold(offset);
                if *scrolled.peek() != past {
                    scrolled.set(past);
                }
            }
            Ok(ViewportEvent::Reveal { id, visible }) => {
                if visible && !reveals.peek().is_revealed(&id) {
                    if reveals.write().update(&id, true) {
                        tracing::debug!(%id, "section revealed");
                    }
                }
            }
            Ok(ViewportEvent::Released) => {
                tracing::debug!("viewport subscriptions released");
                break;
            }
            Err(err) => {
                tracing::debug!(?err, "viewport bridge closed");
                break;
            }
        }
    }
}

/// Release both subscriptions. Safe to call when nothing is installed.
pub fn release_viewport() {
    let _ = document::eval(RELEASE_VIEWPORT_JS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_payload_deserializes() {
        let event: ViewportEvent =
            serde_json::from_str(r#"{"kind":"scroll","offset":51.0}"#).unwrap();
        assert_eq!(event, ViewportEvent::Scroll { offset: 51.0 });
    }

    #[test]
    fn reveal_payload_deserializes() {
        let event: ViewportEvent =
            serde_json::from_str(r#"{"kind":"reveal","id":"about-story","visible":true}"#)
                .unwrap();
        assert_eq!(
            event,
            ViewportEvent::Reveal { id: "about-story".to_string(), visible: true }
        );
    }

    #[test]
    fn released_payload_deserializes() {
        let event: ViewportEvent = serde_json::from_str(r#"{"kind":"released"}"#).unwrap();
        assert_eq!(event, ViewportEvent::Released);
    }

    #[test]
    fn install_and_release_share_the_handle() {
        assert!(INSTALL_VIEWPORT_JS.contains("window.__portfolioViewport"));
        assert!(RELEASE_VIEWPORT_JS.contains("window.__portfolioViewport"));
        assert!(RELEASE_VIEWPORT_JS.contains(".release()"));
    }

    #[test]
    fn watcher_uses_ten_percent_threshold() {
        assert!(INSTALL_VIEWPORT_JS.contains("threshold: 0.1"));
    }

    #[test]
    fn install_reports_initial_offset() {
        // The trailing self-call keeps the navbar correct at offset 0.
        assert!(INSTALL_VIEWPORT_JS.contains("fx.onScroll();"));
    }
}
