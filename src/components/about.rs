//! About Section
//!
//! Competency panel sliding in from the left, bio copy from the right.

use dioxus::prelude::*;
use portfolio_ui::icons::ClipboardListIcon;
use portfolio_ui::{Reveal, RevealVariant};

use crate::content;
use crate::context::use_reveals;

#[component]
pub fn About() -> Element {
    let reveals = use_reveals();

    rsx! {
        section { id: "about", class: "about",
            div { class: "container about-grid",
                Reveal {
                    id: "about-panel".to_string(),
                    active: reveals().is_revealed("about-panel"),
                    variant: RevealVariant::SlideLeft,
                    class: "about-col".to_string(),

                    div { class: "competency-stack",
                        div { class: "competency-backdrop" }
                        div { class: "competency-panel",
                            h3 { class: "competency-heading",
                                ClipboardListIcon { size: 24 }
                                "Core Competencies"
                            }
                            ul { class: "competency-list",
                                for item in content::COMPETENCIES {
                                    li {
                                        span { class: "competency-dot" }
                                        "{item}"
                                    }
                                }
                            }
                        }
                    }
                }

                Reveal {
                    id: "about-story".to_string(),
                    active: reveals().is_revealed("about-story"),
                    variant: RevealVariant::SlideRight,
                    class: "about-col".to_string(),

                    h2 { class: "about-heading",
                        "Bridging Mathematics & "
                        span { class: "about-heading-accent", "Logistics Efficiency" }
                    }
                    p { class: "about-text", {content::ABOUT_INTRO} }
                    p { class: "about-text",
                        {content::ABOUT_ROLE_LEAD}
                        strong { {content::ABOUT_ROLE_COMPANY} }
                        {content::ABOUT_ROLE_REST}
                    }
                    div { class: "trait-tags",
                        for tag in content::TRAITS {
                            span { class: "trait-tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
