//! Contact form with a simulated submission.
//!
//! Nothing is sent anywhere. Submitting marks the form as submitted and
//! schedules a reset that clears every field once the delay has elapsed.
//! The reset is a deadline checked by `poll`, so the host decides when time
//! advances and can cancel it with `dispose`.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::app::domain::{ContactField, ContactForm};

/// Snapshot of the fields at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub form: ContactForm,
    pub submitted_at: Instant,
}

pub struct ContactFormController {
    form: ContactForm,
    submitted: bool,
    reset_delay: Duration,
    reset_deadline: Option<Instant>,
    disposed: bool,
}

impl ContactFormController {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            submitted: false,
            reset_delay,
            reset_deadline: None,
            disposed: false,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn pending_reset(&self) -> Option<Instant> {
        self.reset_deadline
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        if self.disposed {
            return;
        }
        self.form.set(field, value);
    }

    /// Returns `None` once the form has been disposed.
    pub fn submit(&mut self, now: Instant) -> Option<ContactSubmission> {
        if self.disposed {
            return None;
        }

        let form = self.form.clone();
        info!(
            name = %form.name,
            email = %form.email,
            subject = %form.subject,
            "contact form submitted"
        );

        self.submitted = true;
        // A resubmission replaces the pending reset rather than stacking one.
        self.reset_deadline = Some(now + self.reset_delay);

        Some(ContactSubmission {
            form,
            submitted_at: now,
        })
    }

    /// Fire the reset if its deadline has passed. Returns true when it fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.reset_deadline {
            Some(deadline) if !self.disposed && now >= deadline => {
                self.form = ContactForm::default();
                self.submitted = false;
                self.reset_deadline = None;
                debug!("contact form reset");
                true
            }
            _ => false,
        }
    }

    /// Cancel any pending reset. Later calls leave the form untouched.
    pub fn dispose(&mut self) {
        if self.reset_deadline.take().is_some() {
            debug!("pending contact form reset cancelled");
        }
        self.disposed = true;
    }
}
