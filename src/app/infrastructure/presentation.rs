use std::collections::BTreeSet;

use crate::app::domain::ThemePreference;

/// Where the active theme becomes visible.
///
/// Implementations must tolerate the same preference being applied
/// repeatedly.
pub trait PresentationContext {
    fn apply_theme(&mut self, preference: ThemePreference);
}

impl<P: PresentationContext + ?Sized> PresentationContext for &mut P {
    fn apply_theme(&mut self, preference: ThemePreference) {
        (**self).apply_theme(preference)
    }
}

/// Class list of the root document element. The dark theme is expressed by
/// the presence of the `dark` class; every other class is left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentClasses {
    classes: BTreeSet<String>,
}

pub const DARK_CLASS: &str = "dark";

impl DocumentClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn insert(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Add or remove `class` depending on `force`.
    pub fn toggle(&mut self, class: &str, force: bool) {
        if force {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    pub fn is_dark(&self) -> bool {
        self.contains(DARK_CLASS)
    }

    /// Space-separated, like a `class` attribute.
    pub fn to_attribute(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl PresentationContext for DocumentClasses {
    fn apply_theme(&mut self, preference: ThemePreference) {
        self.toggle(DARK_CLASS, preference.is_dark());
    }
}
