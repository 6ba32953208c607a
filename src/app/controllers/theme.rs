use tracing::debug;

use crate::app::domain::ThemePreference;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::presentation::PresentationContext;
use crate::app::infrastructure::store::KeyValueStore;
use crate::app::services::persisted::PersistedValue;

/// Keeps the dark/light preference, the persisted store and the
/// presentation context in agreement.
///
/// Both collaborators are injected; the controller never reaches for
/// process-wide state.
pub struct ThemeController<S, P> {
    store: S,
    presentation: P,
    preference: PersistedValue<ThemePreference>,
    initialized: bool,
}

impl<S: KeyValueStore, P: PresentationContext> ThemeController<S, P> {
    pub fn new(store: S, presentation: P) -> Self {
        Self {
            store,
            presentation,
            preference: PersistedValue::new(),
            initialized: false,
        }
    }

    /// Resolve the stored preference (falling back to light) and apply it.
    /// Performs no store write.
    pub fn initialize(&mut self) -> Result<ThemePreference> {
        let preference = self.preference.get(&self.store)?;
        self.presentation.apply_theme(preference);
        self.initialized = true;
        debug!(%preference, "theme initialized");
        Ok(preference)
    }

    /// Flip the preference, persist it, then apply it.
    ///
    /// Called before `initialize`, the stored value is resolved first so the
    /// flip starts from what the user last chose.
    pub fn toggle(&mut self) -> Result<ThemePreference> {
        let next = self.preference.get(&self.store)?.toggled();
        self.preference.set(&mut self.store, next)?;
        self.presentation.apply_theme(next);
        debug!(preference = %next, "theme toggled");
        Ok(next)
    }

    pub fn preference(&self) -> Option<ThemePreference> {
        self.preference.cached()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }
}
