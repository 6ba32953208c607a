use std::rc::Rc;

use tracing::debug;

use crate::app::domain::Testimonial;
use crate::app::infrastructure::error::{AppError, Result};

/// Read pointer over a fixed, non-empty list of testimonials with
/// wraparound navigation.
///
/// Invariant: `current_index < testimonials.len()` at all times.
pub struct CarouselController {
    testimonials: Rc<[Testimonial]>,
    current_index: usize,
}

impl CarouselController {
    /// Fails with `InvalidConfiguration` for an empty list.
    pub fn new(testimonials: impl Into<Rc<[Testimonial]>>) -> Result<Self> {
        let testimonials = testimonials.into();
        if testimonials.is_empty() {
            return Err(AppError::InvalidConfiguration(
                "testimonial carousel needs at least one testimonial".to_string(),
            ));
        }
        Ok(Self {
            testimonials,
            current_index: 0,
        })
    }

    pub fn current(&self) -> &Testimonial {
        &self.testimonials[self.current_index]
    }

    pub fn next(&mut self) -> &Testimonial {
        self.current_index = wrap(self.current_index as i64 + 1, self.len());
        debug!(index = self.current_index, "carousel next");
        self.current()
    }

    pub fn previous(&mut self) -> &Testimonial {
        self.current_index = wrap(self.current_index as i64 - 1, self.len());
        debug!(index = self.current_index, "carousel previous");
        self.current()
    }

    /// Jump straight to `index`. Out-of-range requests fail and leave the
    /// current position unchanged.
    pub fn go_to(&mut self, index: i64) -> Result<&Testimonial> {
        let len = self.len();
        let target = usize::try_from(index)
            .ok()
            .filter(|i| *i < len)
            .ok_or(AppError::OutOfRange { index, len })?;

        self.current_index = target;
        debug!(index = target, "carousel jump");
        Ok(self.current())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// One flag per testimonial, set for the active one (the dot buttons
    /// under the card).
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.len()).map(|i| i == self.current_index).collect()
    }
}

/// Euclidean wrap of `index` into `0..len`; `len` is never zero here.
fn wrap(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}
