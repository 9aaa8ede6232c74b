//! Pages for the portfolio app.

mod home;

pub use home::Home;
