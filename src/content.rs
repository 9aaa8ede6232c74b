//! Static page content.
//!
//! Everything the page renders is fixed at build time: biography, work
//! history, proficiency levels, credentials, and outbound links. The
//! tables here are the single source for both the rendered sections
//! and the reveal-tagged element set.

/// Icon identity for content entries; mapped to SVG components by
/// `components::glyph::render_glyph`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Truck,
    Package,
    Users,
    TrendingUp,
    Award,
    Mail,
    Phone,
    Linkedin,
}

/// One headline figure in the stat strip.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stat {
    pub glyph: Glyph,
    pub value: &'static str,
    pub label: &'static str,
}

/// One position in the experience timeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub glyph: Glyph,
    pub highlights: &'static [&'static str],
}

/// One proficiency bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SkillLevel {
    pub name: &'static str,
    pub percent: u8,
}

/// One education or certification card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Credential {
    pub title: &'static str,
    pub institution: &'static str,
    /// Optional logo graphic; the card falls back to the award glyph
    /// when this fails to load.
    pub image: Option<&'static str>,
}

/// One outbound contact card in the footer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ContactCard {
    pub caption: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
    /// Opens in the system browser rather than navigating in place.
    pub external: bool,
}

pub const OWNER_NAME: &str = "Labib Hasan";
pub const BRAND_FIRST: &str = "Labib";
pub const BRAND_LAST: &str = "Hasan";

pub const HERO_BADGE: &str = "AVAILABLE FOR ROLES";
pub const HERO_LEAD: &str = "Logistics Professional & Operation Executive with expertise in \
managing large-scale workforces (150+) and 3PL operations at Mahindra Logistics (Flipkart Grocery).";

pub const EMAIL_COMPOSE_URL: &str =
    "https://mail.google.com/mail/?view=cm&fs=1&to=labibhasan216@gmail.com";
pub const PHONE_URI: &str = "tel:+917063557283";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/labib-hasan-a941a824a";

pub const LOCATION: &str = "Madhaipur, Malda, West Bengal – 732142";

pub static STATS: [Stat; 4] = [
    Stat { glyph: Glyph::Users, value: "150+", label: "Workforce Managed" },
    Stat { glyph: Glyph::Package, value: "99%", label: "Dispatch Accuracy" },
    Stat { glyph: Glyph::TrendingUp, value: "3+", label: "Years Experience" },
    Stat { glyph: Glyph::Award, value: "B.Sc.", label: "Math Background" },
];

pub static COMPETENCIES: [&str; 6] = [
    "Supply Chain Management",
    "Warehouse Operations",
    "Manpower Planning",
    "Process Improvement",
    "Data Analysis (Excel)",
    "Last Mile Operations",
];

pub const ABOUT_INTRO: &str = "I am a motivated logistics and operations professional with a \
strong background in process execution and team supervision.";

pub const ABOUT_ROLE_LEAD: &str = "Currently, I serve as an Operation Executive at ";
pub const ABOUT_ROLE_COMPANY: &str = "Mahindra Logistics (Flipkart Grocery)";
pub const ABOUT_ROLE_REST: &str = ", managing a workforce of over 150 associates. My academic \
foundation in Mathematics (B.Sc.) allows me to approach logistical challenges with analytical \
precision, ensuring optimal dispatch flows and target achievement.";

pub static TRAITS: [&str; 2] = ["Target Driven", "Process Oriented"];

pub static JOBS: [Job; 2] = [
    Job {
        role: "Operation Executive",
        company: "Mahindra Logistics (Flipkart Grocery)",
        period: "Sep 2025 – Present",
        glyph: Glyph::Truck,
        highlights: &[
            "Manage end-to-end outbound operations.",
            "Oversee a workforce of 150+ associates.",
            "Ensure smooth dispatch flow and daily target achievement.",
        ],
    },
    Job {
        role: "Team Leader – Outbound",
        company: "Mahindra Logistics",
        period: "Jan 2023 – Sep 2025",
        glyph: Glyph::Package,
        highlights: &[
            "Led warehouse associates to consistent target achievement.",
            "Managed accuracy in pick, pack, sorting, and loading.",
            "Advanced Excel reporting for daily dispatch summaries.",
        ],
    },
];

pub static SKILLS: [SkillLevel; 4] = [
    SkillLevel { name: "MS Excel (Advanced)", percent: 90 },
    SkillLevel { name: "Warehouse Management System (WMS)", percent: 85 },
    SkillLevel { name: "Operations Planning", percent: 88 },
    SkillLevel { name: "Team Leadership", percent: 95 },
];

pub static CREDENTIALS: [Credential; 2] = [
    Credential {
        title: "Logistics & Supply Chain Management",
        institution: "IIT Kharagpur via NPTEL",
        image: Some("assets/certs/nptel-iit-kharagpur.png"),
    },
    Credential {
        title: "B.Sc. Mathematics (CGPA: 8.8)",
        institution: "Malda College, University of Gour Banga (2019-2022)",
        image: None,
    },
];

pub static BADGES: [&str; 2] = ["Advanced ChatGPT", "Diploma CS (ADFA)"];

pub const CONTACT_HEADING: &str = "Ready to Optimize Your Logistics?";

pub static CONTACTS: [ContactCard; 3] = [
    ContactCard {
        caption: "Email Me",
        value: "labibhasan216@gmail.com",
        href: EMAIL_COMPOSE_URL,
        glyph: Glyph::Mail,
        external: true,
    },
    ContactCard {
        caption: "Call Me",
        value: "+91 7063557283",
        href: PHONE_URI,
        glyph: Glyph::Phone,
        external: false,
    },
    ContactCard {
        caption: "Connect",
        value: "LinkedIn Profile",
        href: LINKEDIN_URL,
        glyph: Glyph::Linkedin,
        external: true,
    },
];

/// Reveal id for the stat card at `index`.
pub fn stat_reveal_id(index: usize) -> String {
    format!("stat-{index}")
}

/// Reveal id for the job card at `index`.
pub fn job_reveal_id(index: usize) -> String {
    format!("job-{index}")
}

/// The full reveal-tagged element set, fixed at build time.
///
/// The reveal registry is seeded from this list when the page mounts;
/// ids rendered anywhere else would never animate.
pub fn reveal_ids() -> Vec<String> {
    let mut ids: Vec<String> = (0..STATS.len()).map(stat_reveal_id).collect();
    ids.push("about-panel".to_string());
    ids.push("about-story".to_string());
    ids.push("experience-heading".to_string());
    ids.extend((0..JOBS.len()).map(job_reveal_id));
    ids.push("skills-technical".to_string());
    ids.push("skills-credentials".to_string());
    ids.push("contact".to_string());
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_links_use_expected_schemes() {
        assert!(EMAIL_COMPOSE_URL.starts_with("https://mail.google.com/"));
        assert!(PHONE_URI.starts_with("tel:+"));
        assert!(LINKEDIN_URL.starts_with("https://"));
        for card in CONTACTS {
            assert!(!card.href.is_empty());
        }
    }

    #[test]
    fn skill_percentages_are_in_range() {
        for skill in SKILLS {
            assert!(skill.percent <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn reveal_ids_are_unique() {
        let ids = reveal_ids();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn reveal_ids_cover_every_card() {
        let ids = reveal_ids();
        for i in 0..STATS.len() {
            assert!(ids.contains(&stat_reveal_id(i)));
        }
        for i in 0..JOBS.len() {
            assert!(ids.contains(&job_reveal_id(i)));
        }
        assert!(ids.contains(&"contact".to_string()));
    }

    #[test]
    fn every_job_has_highlights() {
        for job in JOBS {
            assert!(!job.highlights.is_empty());
        }
    }
}
