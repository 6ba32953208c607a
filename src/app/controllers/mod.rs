//! Controllers layer - orchestration and coordination.
//!
//! This module contains the controllers that own page state:
//! - Theme preference
//! - Testimonial carousel
//! - Navigation menu
//! - Contact form

pub mod carousel;
pub mod contact;
pub mod navigation;
pub mod theme;
