//! Section heading with the amber underline accent.

use dioxus::prelude::*;

/// Properties for the SectionTitle component
#[derive(Clone, PartialEq, Props)]
pub struct SectionTitleProps {
    /// Heading text
    pub title: String,
    /// Center the heading and underline (timeline sections)
    #[props(default = false)]
    pub centered: bool,
}

/// Section heading followed by a short amber rule.
#[component]
pub fn SectionTitle(props: SectionTitleProps) -> Element {
    let class = if props.centered {
        "section-title centered"
    } else {
        "section-title"
    };

    rsx! {
        div { class: "{class}",
            h2 { "{props.title}" }
            div { class: "section-rule" }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn centered_class() {
        let centered = true;
        let class = if centered {
            "section-title centered"
        } else {
            "section-title"
        };
        assert_eq!(class, "section-title centered");
    }
}
