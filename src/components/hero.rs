//! Hero Section
//!
//! Slanted gradient backdrop with staggered entrance animations and the
//! ambient truck marquee along the bottom edge. Entrance animation is
//! pure CSS keyed off the hero-step classes; only the sections below
//! the fold use the reveal-on-scroll mechanism.

use dioxus::prelude::*;
use portfolio_ui::icons::{ChevronRightIcon, MailIcon, TruckIcon};

use crate::content;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            // Decorative backdrop rings
            div { class: "hero-backdrop",
                div { class: "hero-ring solid" }
                div { class: "hero-ring dashed" }
            }

            div { class: "hero-inner",
                div { class: "hero-badge hero-step-1",
                    span { class: "badge-dot" }
                    "{content::HERO_BADGE}"
                }

                h1 { class: "hero-title hero-step-2",
                    "Optimizing Operations."
                    br {}
                    span { class: "hero-title-accent", "Delivering Excellence." }
                }

                p { class: "hero-lead hero-step-3", {content::HERO_LEAD} }

                div { class: "hero-actions hero-step-4",
                    a { class: "btn-solid hero-cta", href: "#contact",
                        MailIcon { size: 20 }
                        "Contact Me"
                    }
                    a { class: "btn-outline hero-cta", href: "#experience",
                        "View Experience"
                        ChevronRightIcon { size: 20 }
                    }
                }
            }

            // Ambient marquee
            div { class: "truck-lane",
                div { class: "truck-rig",
                    TruckIcon { size: 120 }
                }
            }
        }
    }
}
