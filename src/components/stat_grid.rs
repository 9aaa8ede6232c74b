//! Stat strip overlapping the hero's slanted base.

use dioxus::prelude::*;
use portfolio_ui::{Reveal, RevealDelay};

use crate::components::glyph::render_glyph;
use crate::content;
use crate::context::use_reveals;

/// Grid of headline figures, cascading in as the strip scrolls into
/// view.
#[component]
pub fn StatGrid() -> Element {
    let reveals = use_reveals();

    rsx! {
        section { class: "stat-strip",
            div { class: "stat-grid",
                for (i, stat) in content::STATS.iter().enumerate() {
                    Reveal {
                        id: content::stat_reveal_id(i),
                        active: reveals().is_revealed(&content::stat_reveal_id(i)),
                        delay: RevealDelay::for_index(i),
                        class: "stat-card".to_string(),

                        div { class: "stat-icon",
                            {render_glyph(stat.glyph, 28)}
                        }
                        h3 { class: "stat-value", "{stat.value}" }
                        p { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}
