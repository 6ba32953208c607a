use std::rc::Rc;
use std::time::Instant;

use tracing::debug;

use super::controllers::carousel::CarouselController;
use super::controllers::contact::{ContactFormController, ContactSubmission};
use super::controllers::navigation::NavigationController;
use super::controllers::theme::ThemeController;
use super::domain::{Message, SiteConfig, Stat, Testimonial, ThemePreference};
use super::infrastructure::error::Result;
use super::infrastructure::presentation::PresentationContext;
use super::infrastructure::store::KeyValueStore;

/// What a dispatched message changed, for the front-end to redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Theme(ThemePreference),
    Menu { open: bool },
    ScrollTo(&'static str),
    Showreel { playing: bool },
    Testimonial(usize),
    FormUpdated,
    Submitted(Option<ContactSubmission>),
}

/// Everything that lives for one page lifetime.
pub struct PageState<S, P> {
    pub theme: ThemeController<S, P>,
    pub carousel: CarouselController,
    pub navigation: NavigationController,
    pub contact: ContactFormController,
    pub showreel_playing: bool,
    stats: Vec<Stat>,
}

impl<S: KeyValueStore, P: PresentationContext> PageState<S, P> {
    /// Build every controller and apply the stored theme.
    pub fn new(config: SiteConfig, store: S, presentation: P) -> Result<Self> {
        let reset_delay = config.contact_reset_delay();
        let testimonials: Rc<[Testimonial]> = config.testimonials.into();
        let carousel = CarouselController::new(testimonials)?;

        let mut theme = ThemeController::new(store, presentation);
        theme.initialize()?;

        Ok(Self {
            theme,
            carousel,
            navigation: NavigationController::new(),
            contact: ContactFormController::new(reset_delay),
            showreel_playing: false,
            stats: config.stats,
        })
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn dispatch(&mut self, message: Message, now: Instant) -> Result<Outcome> {
        debug!(?message, "dispatch");
        let outcome = match message {
            Message::ToggleTheme => Outcome::Theme(self.theme.toggle()?),
            Message::ToggleMenu => Outcome::Menu {
                open: self.navigation.toggle_menu(),
            },
            Message::Navigate(section) => Outcome::ScrollTo(self.navigation.navigate(section)),
            Message::ToggleShowreel => {
                self.showreel_playing = !self.showreel_playing;
                Outcome::Showreel {
                    playing: self.showreel_playing,
                }
            }
            Message::NextTestimonial => {
                self.carousel.next();
                Outcome::Testimonial(self.carousel.current_index())
            }
            Message::PreviousTestimonial => {
                self.carousel.previous();
                Outcome::Testimonial(self.carousel.current_index())
            }
            Message::GoToTestimonial(index) => {
                self.carousel.go_to(index)?;
                Outcome::Testimonial(self.carousel.current_index())
            }
            Message::ContactInput(field, value) => {
                self.contact.set_field(field, value);
                Outcome::FormUpdated
            }
            Message::ContactSubmit => Outcome::Submitted(self.contact.submit(now)),
        };
        Ok(outcome)
    }

    /// Advance timers. Returns true when something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.contact.poll(now)
    }

    pub fn teardown(&mut self) {
        self.contact.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{ContactField, Section, THEME_KEY};
    use crate::app::infrastructure::error::AppError;
    use crate::app::infrastructure::presentation::DocumentClasses;
    use crate::app::infrastructure::store::MemoryStore;
    use std::time::Duration;

    fn page(store: MemoryStore) -> PageState<MemoryStore, DocumentClasses> {
        PageState::new(SiteConfig::default(), store, DocumentClasses::new()).unwrap()
    }

    #[test]
    fn test_new_applies_stored_theme() {
        let state = page(MemoryStore::with_entry(THEME_KEY, "dark"));
        assert!(state.theme.is_initialized());
        assert!(state.theme.presentation().is_dark());
        assert_eq!(state.stats().len(), 4);
    }

    #[test]
    fn test_new_rejects_empty_testimonials() {
        let config = SiteConfig {
            testimonials: Vec::new(),
            ..Default::default()
        };
        let result = PageState::new(config, MemoryStore::new(), DocumentClasses::new());
        assert!(matches!(result, Err(AppError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_dispatch_routes_messages() {
        let mut state = page(MemoryStore::new());
        let now = Instant::now();

        assert_eq!(
            state.dispatch(Message::ToggleTheme, now).unwrap(),
            Outcome::Theme(ThemePreference::Dark)
        );
        assert_eq!(
            state.dispatch(Message::ToggleMenu, now).unwrap(),
            Outcome::Menu { open: true }
        );
        assert_eq!(
            state.dispatch(Message::Navigate(Section::Contact), now).unwrap(),
            Outcome::ScrollTo("#contact")
        );
        assert!(!state.navigation.is_open());
        assert_eq!(
            state.dispatch(Message::PreviousTestimonial, now).unwrap(),
            Outcome::Testimonial(3)
        );
        assert_eq!(
            state.dispatch(Message::NextTestimonial, now).unwrap(),
            Outcome::Testimonial(0)
        );
        assert_eq!(
            state.dispatch(Message::ToggleShowreel, now).unwrap(),
            Outcome::Showreel { playing: true }
        );
    }

    #[test]
    fn test_dispatch_out_of_range_keeps_index() {
        let mut state = page(MemoryStore::new());
        let now = Instant::now();
        state.dispatch(Message::GoToTestimonial(2), now).unwrap();

        let err = state.dispatch(Message::GoToTestimonial(9), now).unwrap_err();
        assert!(matches!(err, AppError::OutOfRange { index: 9, len: 4 }));
        assert_eq!(state.carousel.current_index(), 2);
    }

    #[test]
    fn test_form_flow_and_teardown() {
        let mut state = page(MemoryStore::new());
        let start = Instant::now();

        state
            .dispatch(Message::ContactInput(ContactField::Name, "Iris".to_string()), start)
            .unwrap();
        let outcome = state.dispatch(Message::ContactSubmit, start).unwrap();
        assert!(matches!(outcome, Outcome::Submitted(Some(ref s)) if s.form.name == "Iris"));

        state.teardown();
        assert!(!state.tick(start + Duration::from_secs(60)));
        assert!(state.contact.is_submitted());
    }

    #[test]
    fn test_tick_resets_form_after_delay() {
        let mut state = page(MemoryStore::new());
        let start = Instant::now();
        state.dispatch(Message::ContactSubmit, start).unwrap();

        assert!(!state.tick(start + Duration::from_millis(100)));
        assert!(state.tick(start + Duration::from_millis(3000)));
        assert!(!state.contact.is_submitted());
    }
}
