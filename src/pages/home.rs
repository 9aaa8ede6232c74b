//! The single portfolio page.
//!
//! Sections are anchored for the fragment navigation in the header;
//! there is no routing beyond that.

use dioxus::prelude::*;

use crate::components::{About, Contact, Experience, Hero, NavHeader, Skills, StatGrid};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            NavHeader {}
            main {
                Hero {}
                StatGrid {}
                About {}
                Experience {}
                Skills {}
                Contact {}
            }
        }
    }
}
