//! Skills & Credentials Section
//!
//! Proficiency bars on the left, education and certification cards on
//! the right. The certification logo is optional: when it fails to
//! load, the broken image is hidden and the award glyph next to it
//! carries the card.

use dioxus::prelude::*;
use portfolio_ui::icons::{AwardIcon, TrendingUpIcon};
use portfolio_ui::{Reveal, RevealVariant, SkillBar};

use crate::content;
use crate::context::use_reveals;

/// Whether the credential seal should currently render its image.
fn seal_shows_image(has_image: bool, failed: bool) -> bool {
    has_image && !failed
}

#[component]
pub fn Skills() -> Element {
    let reveals = use_reveals();

    rsx! {
        section { id: "skills", class: "skills",
            div { class: "container skills-grid",
                Reveal {
                    id: "skills-technical".to_string(),
                    active: reveals().is_revealed("skills-technical"),
                    variant: RevealVariant::SlideLeft,
                    class: "skills-col".to_string(),

                    h3 { class: "skills-heading",
                        span { class: "skills-heading-icon blue", TrendingUpIcon { size: 24 } }
                        "Technical Proficiency"
                    }
                    div { class: "skill-list",
                        for skill in content::SKILLS.iter() {
                            SkillBar {
                                name: skill.name.to_string(),
                                percent: skill.percent,
                            }
                        }
                    }
                }

                Reveal {
                    id: "skills-credentials".to_string(),
                    active: reveals().is_revealed("skills-credentials"),
                    variant: RevealVariant::SlideRight,
                    class: "skills-col".to_string(),

                    h3 { class: "skills-heading",
                        span { class: "skills-heading-icon amber", AwardIcon { size: 24 } }
                        "Education & Certifications"
                    }
                    div { class: "credential-list",
                        for cred in content::CREDENTIALS.iter() {
                            CredentialCard {
                                title: cred.title.to_string(),
                                institution: cred.institution.to_string(),
                                image: cred.image.map(str::to_string),
                            }
                        }
                        div { class: "badge-row",
                            for badge in content::BADGES {
                                span { class: "badge-pill", "{badge}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Properties for a credential card
#[derive(Props, Clone, PartialEq)]
pub struct CredentialCardProps {
    pub title: String,
    pub institution: String,
    /// Optional logo; hidden on load failure
    #[props(default)]
    pub image: Option<String>,
}

/// Education or certification card with an image-fallback seal.
#[component]
pub fn CredentialCard(props: CredentialCardProps) -> Element {
    let mut image_failed = use_signal(|| false);
    let show_image = seal_shows_image(props.image.is_some(), image_failed());

    rsx! {
        div { class: "credential-card",
            div { class: "credential-seal",
                if show_image {
                    if let Some(src) = props.image.as_deref() {
                        img {
                            class: "credential-logo",
                            src: "{src}",
                            alt: "{props.institution}",
                            onerror: move |_| image_failed.set(true),
                        }
                    }
                }
                span { class: "credential-glyph",
                    AwardIcon { size: 32 }
                }
            }
            div { class: "credential-copy",
                h4 { "{props.title}" }
                p { "{props.institution}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_renders_image_until_failure() {
        assert!(seal_shows_image(true, false));
        assert!(!seal_shows_image(true, true));
    }

    #[test]
    fn seal_without_image_never_renders_one() {
        assert!(!seal_shows_image(false, false));
        assert!(!seal_shows_image(false, true));
    }
}
