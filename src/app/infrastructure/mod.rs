//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Persisted key-value store (local storage stand-in)
//! - Presentation context the theme is applied to
//! - Error types

pub mod error;
pub mod presentation;
pub mod store;
