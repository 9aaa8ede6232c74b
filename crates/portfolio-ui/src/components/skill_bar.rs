//! Proficiency bar with a gradient fill.

use dioxus::prelude::*;

/// Inline style for the fill track, clamped to 0–100%.
pub fn fill_width_style(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

/// Properties for the SkillBar component
#[derive(Clone, PartialEq, Props)]
pub struct SkillBarProps {
    /// Skill label
    pub name: String,
    /// Proficiency, 0–100
    pub percent: u8,
}

/// Labeled proficiency bar.
///
/// The fill width transitions in via CSS once the surrounding section
/// reveals; the width itself is static content.
#[component]
pub fn SkillBar(props: SkillBarProps) -> Element {
    let width = fill_width_style(props.percent);
    let shown = props.percent.min(100);

    rsx! {
        div { class: "skill-bar",
            div { class: "skill-bar-head",
                span { class: "skill-name", "{props.name}" }
                span { class: "skill-percent", "{shown}%" }
            }
            div { class: "skill-track",
                div { class: "skill-fill", style: "{width}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_width_matches_percent() {
        assert_eq!(fill_width_style(90), "width: 90%;");
        assert_eq!(fill_width_style(0), "width: 0%;");
    }

    #[test]
    fn fill_width_clamps_overflow() {
        assert_eq!(fill_width_style(130), "width: 100%;");
    }
}
