use super::contact::ContactField;
use super::section::Section;

/// All messages the front-end can send to the page state.
/// Each user interaction produces one of these; `PageState::dispatch` handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation bar
    ToggleTheme,
    ToggleMenu,
    Navigate(Section),

    // Showreel
    ToggleShowreel,

    // Testimonials
    NextTestimonial,
    PreviousTestimonial,
    GoToTestimonial(i64),

    // Contact
    ContactInput(ContactField, String),
    ContactSubmit,
}
