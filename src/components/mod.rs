//! Section components for the portfolio page.

mod about;
mod contact;
mod experience;
pub mod glyph;
mod hero;
mod mobile_nav;
mod nav_header;
mod skills;
mod stat_grid;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use mobile_nav::MobileNav;
pub use nav_header::{NavHeader, NavSection};
pub use skills::{CredentialCard, Skills};
pub use stat_grid::StatGrid;
