//! Presentational components for the portfolio page.

mod button;
pub mod icons;
mod reveal;
mod section_title;
mod skill_bar;

pub use button::{Button, ButtonVariant, IconButton};
pub use reveal::{Reveal, RevealDelay, RevealVariant};
pub use section_title::SectionTitle;
pub use skill_bar::{SkillBar, fill_width_style};
