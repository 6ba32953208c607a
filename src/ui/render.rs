//! Plain-text views of the page state.

use crate::app::PageState;
use crate::app::controllers::carousel::CarouselController;
use crate::app::controllers::contact::ContactFormController;
use crate::app::controllers::navigation::NavigationController;
use crate::app::domain::{ContactField, Stat, ThemePreference};
use crate::app::infrastructure::store::KeyValueStore;

use super::theme::{Role, TerminalTheme};

const FILLED_STAR: char = '\u{2605}';
const DOT_ACTIVE: char = '\u{25cf}';
const DOT_IDLE: char = '\u{25cb}';

pub fn stars(count: u8) -> String {
    std::iter::repeat_n(FILLED_STAR, count as usize).collect()
}

pub fn navigation(nav: &NavigationController, preference: ThemePreference, theme: &TerminalTheme) -> String {
    let icon = match preference {
        ThemePreference::Light => "[moon]",
        ThemePreference::Dark => "[sun]",
    };
    let mut out = theme.paint("EDITOR.", Role::Accent);
    if nav.is_open() {
        for item in nav.items() {
            out.push('\n');
            out.push_str(&theme.paint(&format!("  {}", item.label()), Role::Text));
        }
        out.push('\n');
        out.push_str(&theme.paint(icon, Role::Muted));
    } else {
        out.push_str("  ");
        let labels: Vec<String> = nav
            .items()
            .iter()
            .map(|item| theme.paint(item.label(), Role::Text))
            .collect();
        out.push_str(&labels.join(" "));
        out.push(' ');
        out.push_str(&theme.paint(icon, Role::Muted));
    }
    out
}

pub fn testimonial_card(carousel: &CarouselController, theme: &TerminalTheme) -> String {
    let t = carousel.current();
    let dots: String = carousel
        .indicators()
        .into_iter()
        .map(|active| if active { DOT_ACTIVE } else { DOT_IDLE })
        .collect();

    [
        theme.paint(&stars(t.rating.stars()), Role::Accent),
        theme.paint(&format!("\"{}\"", t.text), Role::Text),
        theme.paint(&t.name, Role::Text),
        theme.paint(&t.byline(), Role::Muted),
        theme.paint(
            &format!("< {} >  ({}/{})", dots, carousel.current_index() + 1, carousel.len()),
            Role::Border,
        ),
    ]
    .join("\n")
}

pub fn stats(stats: &[Stat], theme: &TerminalTheme) -> String {
    stats
        .iter()
        .map(|s| {
            format!(
                "{} {}",
                theme.paint(&s.number, Role::Accent),
                theme.paint(&s.label, Role::Muted)
            )
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn contact_form(contact: &ContactFormController, theme: &TerminalTheme) -> String {
    if contact.is_submitted() {
        return theme.paint("Thanks for reaching out! I'll get back to you soon.", Role::Accent);
    }
    ContactField::ALL
        .iter()
        .map(|field| {
            let value = contact.form().field(*field);
            format!(
                "{} {}",
                theme.paint(&format!("{:>8}:", field.as_str()), Role::Muted),
                theme.paint(value, Role::Text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The sections that carry state, top to bottom.
pub fn page<S: KeyValueStore>(state: &PageState<S, TerminalTheme>) -> String {
    let theme = state.theme.presentation();
    let preference = theme.preference();
    let showreel = if state.showreel_playing {
        "[showreel playing]"
    } else {
        "[showreel paused]"
    };

    [
        navigation(&state.navigation, preference, theme),
        theme.paint(showreel, Role::Muted),
        testimonial_card(&state.carousel, theme),
        stats(state.stats(), theme),
        contact_form(&state.contact, theme),
    ]
    .join("\n\n")
}
