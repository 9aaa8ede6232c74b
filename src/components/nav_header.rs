//! Navigation Header Component
//!
//! Fixed over the hero. Transparent at the top of the page, solid with
//! a shadow once scrolled past the threshold.
//!
//! Desktop: brand mark, four anchor links, "Hire Me" CTA.
//! Mobile: brand mark plus a hamburger toggling the dropdown menu.

use dioxus::prelude::*;
use portfolio_ui::icons::{BoxIcon, MenuIcon, XIcon};
use portfolio_ui::IconButton;

use crate::components::MobileNav;
use crate::content;
use crate::context::use_scrolled;

/// In-page section targeted by a navigation link
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavSection {
    About,
    Experience,
    Skills,
    Contact,
}

impl NavSection {
    /// All sections, in page order
    pub const ALL: [NavSection; 4] = [
        NavSection::About,
        NavSection::Experience,
        NavSection::Skills,
        NavSection::Contact,
    ];

    /// Get the display name for this section
    pub fn label(&self) -> &'static str {
        match self {
            NavSection::About => "About",
            NavSection::Experience => "Experience",
            NavSection::Skills => "Skills",
            NavSection::Contact => "Contact",
        }
    }

    /// Fragment anchor for this section
    pub fn anchor(&self) -> &'static str {
        match self {
            NavSection::About => "#about",
            NavSection::Experience => "#experience",
            NavSection::Skills => "#skills",
            NavSection::Contact => "#contact",
        }
    }
}

/// Navbar class as a pure function of the scroll flag
fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled {
        "navbar scrolled"
    } else {
        "navbar"
    }
}

/// Fixed navigation bar
#[component]
pub fn NavHeader() -> Element {
    let scrolled = use_scrolled();
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "{navbar_class(scrolled())}",
            div { class: "nav-inner",
                div { class: "brand",
                    div { class: "brand-mark",
                        BoxIcon { size: 24 }
                    }
                    span { class: "brand-name",
                        span { class: "brand-accent", "{content::BRAND_FIRST} " }
                        "{content::BRAND_LAST}"
                    }
                }

                // Desktop links
                div { class: "nav-links",
                    for section in NavSection::ALL {
                        a {
                            class: "nav-link",
                            href: "{section.anchor()}",
                            "{section.label()}"
                        }
                    }
                    a {
                        class: "btn-solid btn-hire",
                        href: content::EMAIL_COMPOSE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Hire Me"
                    }
                }

                // Mobile menu toggle
                IconButton {
                    class: "menu-toggle".to_string(),
                    aria_label: "Toggle navigation menu".to_string(),
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        XIcon { size: 28 }
                    } else {
                        MenuIcon { size: 28 }
                    }
                }
            }

            // Mobile dropdown (collapsed on desktop via CSS)
            MobileNav {
                open: menu_open(),
                on_navigate: move |_| menu_open.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_class_follows_scroll_flag() {
        assert_eq!(navbar_class(false), "navbar");
        assert_eq!(navbar_class(true), "navbar scrolled");
    }

    #[test]
    fn section_anchors_match_labels() {
        assert_eq!(NavSection::About.anchor(), "#about");
        assert_eq!(NavSection::Experience.anchor(), "#experience");
        assert_eq!(NavSection::Skills.anchor(), "#skills");
        assert_eq!(NavSection::Contact.anchor(), "#contact");
    }

    #[test]
    fn sections_are_in_page_order() {
        let labels: Vec<_> = NavSection::ALL.iter().map(NavSection::label).collect();
        assert_eq!(labels, ["About", "Experience", "Skills", "Contact"]);
    }
}
