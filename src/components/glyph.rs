//! Maps content glyph identities to icon components.

use dioxus::prelude::*;
use portfolio_ui::icons::{
    AwardIcon, LinkedinIcon, MailIcon, PackageIcon, PhoneIcon, TrendingUpIcon, TruckIcon,
    UsersIcon,
};

use crate::content::Glyph;

/// Render the icon for a content entry at the given size.
pub fn render_glyph(glyph: Glyph, size: u32) -> Element {
    match glyph {
        Glyph::Truck => rsx! { TruckIcon { size: size } },
        Glyph::Package => rsx! { PackageIcon { size: size } },
        Glyph::Users => rsx! { UsersIcon { size: size } },
        Glyph::TrendingUp => rsx! { TrendingUpIcon { size: size } },
        Glyph::Award => rsx! { AwardIcon { size: size } },
        Glyph::Mail => rsx! { MailIcon { size: size } },
        Glyph::Phone => rsx! { PhoneIcon { size: size } },
        Glyph::Linkedin => rsx! { LinkedinIcon { size: size } },
    }
}
