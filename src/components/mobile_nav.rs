//! Mobile Navigation Dropdown
//!
//! Collapsible menu under the navbar on narrow viewports. Any link
//! activation closes the menu, whatever state it was in.

use dioxus::prelude::*;

use crate::components::NavSection;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Whether the dropdown is expanded
    pub open: bool,
    /// Called on every link activation so the owner can close the menu
    pub on_navigate: EventHandler<()>,
}

/// Dropdown class as a pure function of the open flag
fn menu_class(open: bool) -> &'static str {
    if open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    }
}

/// Mobile dropdown menu
///
/// Expansion is a CSS max-height transition on the open/closed class.
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        div { class: "{menu_class(props.open)}",
            for section in NavSection::ALL {
                a {
                    class: "mobile-menu-link",
                    href: "{section.anchor()}",
                    onclick: move |_| on_navigate.call(()),
                    "{section.label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_class_when_open() {
        assert_eq!(menu_class(true), "mobile-menu open");
    }

    #[test]
    fn menu_class_when_closed() {
        assert_eq!(menu_class(false), "mobile-menu");
    }
}
