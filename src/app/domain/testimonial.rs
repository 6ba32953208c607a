use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(AppError::InvalidConfiguration(format!(
                "rating {} is outside {}..={}",
                stars,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = AppError;

    fn try_from(stars: u8) -> Result<Self> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub text: String,
    pub rating: Rating,
}

impl Testimonial {
    pub fn new(name: &str, role: &str, company: &str, text: &str, rating: u8) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            text: text.to_string(),
            rating: Rating::new(rating)?,
        })
    }

    /// "Role at Company", as shown under the client name
    pub fn byline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

/// Headline figure shown beside the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

fn testimonial(name: &str, role: &str, company: &str, text: &str) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        text: text.to_string(),
        rating: Rating(5),
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "Sarah Johnson",
            "Marketing Director",
            "Tech Innovations Inc",
            "The quality of work was exceptional. The video editing was crisp, the color grading was professional, and everything was delivered on time. Highly recommended!",
        ),
        testimonial(
            "Michael Chen",
            "Content Creator",
            "Digital Media Studio",
            "Working with this talented editor has transformed my content. The creative vision and technical expertise brought my projects to the next level.",
        ),
        testimonial(
            "Emily Rodriguez",
            "Film Producer",
            "Indie Productions",
            "Professional, creative, and responsive. The attention to detail in every frame shows true passion for the craft. Would definitely work together again!",
        ),
        testimonial(
            "David Thompson",
            "Brand Manager",
            "Creative Agency",
            "Fast turnaround without compromising quality. The motion graphics work added amazing visual appeal to our commercial campaign.",
        ),
    ]
}

pub fn default_stats() -> Vec<Stat> {
    [
        ("100+", "Videos Edited"),
        ("30+", "Clients Served"),
        ("4.9\u{2605}", "Average Rating"),
        ("3+", "Years Experience"),
    ]
    .into_iter()
    .map(|(number, label)| Stat {
        number: number.to_string(),
        label: label.to_string(),
    })
    .collect()
}
