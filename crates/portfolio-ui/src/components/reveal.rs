//! Reveal wrapper component.
//!
//! Tags a block of content for the one-shot reveal animation. The
//! wrapper renders the `data-reveal` attribute the viewport watcher
//! queries for, and derives its CSS classes from the element's current
//! reveal state, which the page root owns.

use dioxus::prelude::*;

/// Direction the content enters from when it reveals.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealVariant {
    /// Rise from below (the default fade-up)
    #[default]
    Rise,
    /// Slide in from the left edge
    SlideLeft,
    /// Slide in from the right edge
    SlideRight,
}

impl RevealVariant {
    /// Base CSS classes for this entry direction
    pub fn class(&self) -> &'static str {
        match self {
            RevealVariant::Rise => "reveal",
            RevealVariant::SlideLeft => "reveal reveal-left",
            RevealVariant::SlideRight => "reveal reveal-right",
        }
    }
}

/// Stagger step applied before the transition starts.
///
/// Used by grids so sibling cards cascade instead of appearing at once.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealDelay {
    /// No stagger
    #[default]
    None,
    /// 100ms
    Short,
    /// 200ms
    Medium,
    /// 300ms
    Long,
}

impl RevealDelay {
    /// Stagger step for a card at `index` within a grid row.
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => RevealDelay::None,
            1 => RevealDelay::Short,
            2 => RevealDelay::Medium,
            _ => RevealDelay::Long,
        }
    }

    /// CSS class fragment, empty when unstaggered
    pub fn class(&self) -> &'static str {
        match self {
            RevealDelay::None => "",
            RevealDelay::Short => "reveal-delay-100",
            RevealDelay::Medium => "reveal-delay-200",
            RevealDelay::Long => "reveal-delay-300",
        }
    }
}

/// Compose the full class list for a reveal wrapper.
pub fn reveal_class(
    variant: RevealVariant,
    delay: RevealDelay,
    active: bool,
    extra: &str,
) -> String {
    let mut class = String::from(variant.class());
    if active {
        class.push_str(" active");
    }
    let delay = delay.class();
    if !delay.is_empty() {
        class.push(' ');
        class.push_str(delay);
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Reveal wrapper
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Stable identity the viewport watcher reports against
    pub id: String,
    /// Whether the element has revealed (owned by the page root)
    pub active: bool,
    /// Entry direction
    #[props(default)]
    pub variant: RevealVariant,
    /// Stagger step
    #[props(default)]
    pub delay: RevealDelay,
    /// Additional CSS classes for the wrapper itself
    #[props(default)]
    pub class: Option<String>,
    /// Wrapped content
    pub children: Element,
}

/// Wrapper that tags its children for reveal-on-scroll.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal {
///         id: "about-story".to_string(),
///         active: reveals().is_revealed("about-story"),
///         variant: RevealVariant::SlideRight,
///         p { "…" }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let class = reveal_class(
        props.variant,
        props.delay,
        props.active,
        props.class.as_deref().unwrap_or(""),
    );

    rsx! {
        div {
            class: "{class}",
            "data-reveal": "{props.id}",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes() {
        assert_eq!(RevealVariant::Rise.class(), "reveal");
        assert_eq!(RevealVariant::SlideLeft.class(), "reveal reveal-left");
        assert_eq!(RevealVariant::SlideRight.class(), "reveal reveal-right");
    }

    #[test]
    fn delay_classes() {
        assert_eq!(RevealDelay::None.class(), "");
        assert_eq!(RevealDelay::Short.class(), "reveal-delay-100");
        assert_eq!(RevealDelay::Medium.class(), "reveal-delay-200");
        assert_eq!(RevealDelay::Long.class(), "reveal-delay-300");
    }

    #[test]
    fn delay_cycles_by_index() {
        assert_eq!(RevealDelay::for_index(0), RevealDelay::None);
        assert_eq!(RevealDelay::for_index(1), RevealDelay::Short);
        assert_eq!(RevealDelay::for_index(2), RevealDelay::Medium);
        assert_eq!(RevealDelay::for_index(3), RevealDelay::Long);
        assert_eq!(RevealDelay::for_index(4), RevealDelay::None);
    }

    #[test]
    fn pending_class_has_no_active_marker() {
        let class = reveal_class(RevealVariant::Rise, RevealDelay::None, false, "");
        assert_eq!(class, "reveal");
    }

    #[test]
    fn active_class_composition() {
        let class = reveal_class(
            RevealVariant::SlideLeft,
            RevealDelay::Medium,
            true,
            "stat-card",
        );
        assert_eq!(class, "reveal reveal-left active reveal-delay-200 stat-card");
    }
}
