//! Experience Section
//!
//! Vertical timeline with a center line, circular icon nodes, and
//! alternating job cards. Odd entries mirror the layout and slide in
//! from the opposite edge.

use dioxus::prelude::*;
use portfolio_ui::{Reveal, RevealVariant, SectionTitle};

use crate::components::glyph::render_glyph;
use crate::content::{self, Job};
use crate::context::use_reveals;

#[component]
pub fn Experience() -> Element {
    let reveals = use_reveals();

    rsx! {
        section { id: "experience", class: "experience",
            div { class: "container",
                Reveal {
                    id: "experience-heading".to_string(),
                    active: reveals().is_revealed("experience-heading"),
                    SectionTitle {
                        title: "Professional Journey".to_string(),
                        centered: true,
                    }
                }

                div { class: "timeline",
                    for (i, job) in content::JOBS.iter().enumerate() {
                        {timeline_entry(i, job, reveals().is_revealed(&content::job_reveal_id(i)))}
                    }
                }
            }
        }
    }
}

/// One timeline row: period, icon node, and the job card.
fn timeline_entry(index: usize, job: &'static Job, revealed: bool) -> Element {
    let flipped = index % 2 == 1;
    let variant = if flipped {
        RevealVariant::SlideRight
    } else {
        RevealVariant::SlideLeft
    };
    let row_class = if flipped { "timeline-row flipped" } else { "timeline-row" };
    let node_class = if index == 0 {
        "timeline-node current"
    } else {
        "timeline-node"
    };

    rsx! {
        Reveal {
            id: content::job_reveal_id(index),
            active: revealed,
            variant: variant,
            class: "timeline-entry".to_string(),

            div { class: "timeline-line" }
            div { class: "{row_class}",
                div { class: "timeline-period",
                    span { "{job.period}" }
                }
                div { class: "{node_class}",
                    {render_glyph(job.glyph, 14)}
                }
                div { class: "timeline-card-slot",
                    div { class: "timeline-card",
                        h3 { class: "job-role", "{job.role}" }
                        h4 { class: "job-company", "{job.company}" }
                        p { class: "job-period-inline", "{job.period}" }
                        ul { class: "job-highlights",
                            for line in job.highlights {
                                li { "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn rows_alternate_orientation() {
        let row_class = |index: usize| {
            if index % 2 == 1 {
                "timeline-row flipped"
            } else {
                "timeline-row"
            }
        };
        assert_eq!(row_class(0), "timeline-row");
        assert_eq!(row_class(1), "timeline-row flipped");
        assert_eq!(row_class(2), "timeline-row");
    }
}
