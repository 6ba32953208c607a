use crate::app::domain::ThemePreference;
use crate::app::infrastructure::presentation::PresentationContext;

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub border: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: (255, 255, 255),
        text: (17, 24, 39),
        muted: (107, 114, 128),
        accent: (37, 99, 235),
        border: (229, 231, 235),
    };

    pub const DARK: Palette = Palette {
        background: (17, 24, 39),
        text: (243, 244, 246),
        muted: (156, 163, 175),
        accent: (96, 165, 250),
        border: (55, 65, 81),
    };

    pub fn for_preference(preference: ThemePreference) -> Palette {
        match preference {
            ThemePreference::Light => Self::LIGHT,
            ThemePreference::Dark => Self::DARK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Text,
    Muted,
    Accent,
    Border,
}

/// Terminal presentation context: colours output with 24-bit ANSI escapes
/// from the active palette. `plain` output skips the escapes entirely.
#[derive(Debug, Clone)]
pub struct TerminalTheme {
    palette: Palette,
    preference: ThemePreference,
    plain: bool,
}

impl TerminalTheme {
    pub fn new(plain: bool) -> Self {
        Self {
            palette: Palette::LIGHT,
            preference: ThemePreference::Light,
            plain,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn paint(&self, text: &str, role: Role) -> String {
        if self.plain {
            return text.to_string();
        }
        let (r, g, b) = match role {
            Role::Text => self.palette.text,
            Role::Muted => self.palette.muted,
            Role::Accent => self.palette.accent,
            Role::Border => self.palette.border,
        };
        let (br, bg, bb) = self.palette.background;
        format!("\x1b[38;2;{r};{g};{b}m\x1b[48;2;{br};{bg};{bb}m{text}\x1b[0m")
    }
}

impl PresentationContext for TerminalTheme {
    fn apply_theme(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.palette = Palette::for_preference(preference);
    }
}
