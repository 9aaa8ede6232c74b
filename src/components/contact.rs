//! Contact Footer Section
//!
//! Dark closing section with the three outbound cards and the footer
//! row. Links are literal anchors; the webview hands external ones to
//! the system browser.

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_ui::icons::MapPinIcon;
use portfolio_ui::Reveal;

use crate::components::glyph::render_glyph;
use crate::content;
use crate::context::use_reveals;

#[component]
pub fn Contact() -> Element {
    let reveals = use_reveals();
    let year = chrono::Utc::now().year();

    rsx! {
        section { id: "contact", class: "contact",
            Reveal {
                id: "contact".to_string(),
                active: reveals().is_revealed("contact"),
                class: "container contact-inner".to_string(),

                h2 { class: "contact-heading", "{content::CONTACT_HEADING}" }

                div { class: "contact-cards",
                    for card in content::CONTACTS.iter() {
                        a {
                            class: "contact-card",
                            href: "{card.href}",
                            target: if card.external { "_blank" },
                            rel: if card.external { "noopener noreferrer" },

                            span { class: "contact-card-icon",
                                {render_glyph(card.glyph, 24)}
                            }
                            div { class: "contact-card-copy",
                                p { class: "contact-card-caption", "{card.caption}" }
                                p { class: "contact-card-value", "{card.value}" }
                            }
                        }
                    }
                }

                div { class: "footer-row",
                    div { class: "footer-location",
                        MapPinIcon { size: 16 }
                        "{content::LOCATION}"
                    }
                    p { class: "footer-copyright",
                        "© {year} {content::OWNER_NAME}. All rights reserved."
                    }
                }
            }
        }
    }
}
