/// Page sections reachable from the navigation bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Showreel,
    Projects,
    Skills,
    Services,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::About,
        Section::Showreel,
        Section::Projects,
        Section::Skills,
        Section::Services,
        Section::Testimonials,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Showreel => "Showreel",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Services => "Services",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "#about",
            Section::Showreel => "#showreel",
            Section::Projects => "#projects",
            Section::Skills => "#skills",
            Section::Services => "#services",
            Section::Testimonials => "#testimonials",
            Section::Contact => "#contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Case-insensitive match on the label; a leading `#` selects by anchor.
    pub fn from_label(label: &str) -> Option<Section> {
        let label = label.trim();
        if label.starts_with('#') {
            return Self::from_anchor(label);
        }
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}
