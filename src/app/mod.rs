//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ThemePreference, Testimonial, SiteConfig, Message)
//! - `controllers/` - Page state owners (theme, carousel, navigation, contact form)
//! - `services/` - Shared mechanics (lazily persisted values)
//! - `infrastructure/` - External collaborators (store, presentation context, error)
//! - `state.rs` - Page-lifetime coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::carousel::CarouselController;
pub use controllers::contact::{ContactFormController, ContactSubmission};
pub use controllers::navigation::NavigationController;
pub use controllers::theme::ThemeController;
pub use domain::{ContactField, Message, Section, SiteConfig, Testimonial, ThemePreference};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::presentation::{DocumentClasses, PresentationContext};
pub use infrastructure::store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use state::{Outcome, PageState};
