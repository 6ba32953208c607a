//! Page-state core for a freelance video editor's portfolio site.
//!
//! The interesting state on the page is small: a persisted dark/light
//! preference, a testimonial carousel with wraparound navigation, the
//! navigation menu and a contact form that pretends to submit. The `app`
//! module owns that state behind injected collaborators; `ui` renders it
//! to a terminal.

pub mod app;
pub mod ui;
