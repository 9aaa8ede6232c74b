//! Color constants for the warm industrial palette.
//!
//! The stylesheet carries the same values as CSS custom properties;
//! these constants exist for inline styles and future components.

#![allow(dead_code)]

// === BACKDROP (Hero, dark panels) ===
pub const NAVY_DEEP: &str = "#172554";
pub const NAVY: &str = "#1e3a8a";
pub const INK: &str = "#0f172a";

// === ACCENT (Calls to action, markers) ===
pub const AMBER: &str = "#f97316";
pub const AMBER_DEEP: &str = "#ea580c";
pub const AMBER_GLOW: &str = "rgba(249, 115, 22, 0.3)";

// === SURFACE ===
pub const PAPER: &str = "#f8fafc";
pub const CARD: &str = "#ffffff";
pub const PANEL_DARK: &str = "#1e293b";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1e293b";
pub const TEXT_SECONDARY: &str = "#475569";
pub const TEXT_MUTED: &str = "#64748b";
pub const TEXT_ON_DARK: &str = "#dbeafe";

// === SEMANTIC ===
pub const LINK_BLUE: &str = "#2563eb";
pub const AVAILABLE_GREEN: &str = "#4ade80";
