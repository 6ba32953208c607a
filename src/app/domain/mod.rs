//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme preference
//! - Testimonials and stats
//! - Page sections and the contact form
//! - Site configuration
//! - Message types for the event system

pub mod config;
pub mod contact;
pub mod messages;
pub mod section;
pub mod testimonial;
pub mod theme;

pub use config::SiteConfig;
pub use contact::{ContactField, ContactForm};
pub use messages::Message;
pub use section::Section;
pub use testimonial::{Rating, Stat, Testimonial};
pub use theme::{THEME_KEY, ThemePreference};
