//! Portfolio UI Components
//!
//! This crate provides the Dioxus building blocks for the portfolio
//! page: buttons, the Lucide-style icon set, section furniture, and the
//! reveal-on-scroll primitives.
//!
//! ## Design Language
//!
//! Warm industrial palette over a light surface:
//! - **Amber (#f97316)**: calls to action, accents, timeline markers
//! - **Deep Navy (#172554)**: hero backdrop, headline gradients
//! - **Slate (#1e293b)**: body text, dark panels
//! - **Paper (#f8fafc)**: page background
//!
//! Components are purely presentational; page state (scroll flag,
//! reveal registry, menu toggle) lives with the application root.

pub mod components;
pub mod reveal;

pub use components::*;
pub use reveal::{RevealRegistry, RevealState};
