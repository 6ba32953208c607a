use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use reelfolio::app::{
    AppError, ContactField, JsonFileStore, KeyValueStore, Message, Outcome, PageState, Result, Section,
    SiteConfig,
};
use reelfolio::ui::render;
use reelfolio::ui::theme::TerminalTheme;

const HELP: &str = "\
commands:
  next | prev | goto <n>      move through testimonials (n starts at 1)
  theme                       toggle dark/light
  menu                        open/close the navigation menu
  nav <section>               jump to a section (About, Showreel, ...)
  play                        play/pause the showreel
  set <field> <text>          fill a contact field (name, email, subject, message)
  submit                      send the contact form
  show | help | quit";

/// Terminal front-end for the portfolio page state.
#[derive(Parser, Debug)]
#[command(name = "reelfolio", version)]
struct Args {
    /// Print without colour escapes
    #[arg(long)]
    plain: bool,
    /// Site config (TOML); defaults to the per-user config directory
    #[arg(long)]
    config: Option<PathBuf>,
    /// Persisted store file (JSON); overrides `storage_path` from the config
    #[arg(long)]
    store: Option<PathBuf>,
}

enum Command {
    Dispatch(Message),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let message = match word {
        "next" => Message::NextTestimonial,
        "prev" | "previous" => Message::PreviousTestimonial,
        "goto" => {
            let n: i64 = rest.parse().map_err(|_| format!("not a number: {:?}", rest))?;
            Message::GoToTestimonial(n.saturating_sub(1))
        }
        "theme" => Message::ToggleTheme,
        "menu" => Message::ToggleMenu,
        "nav" => Section::from_label(rest)
            .map(Message::Navigate)
            .ok_or_else(|| format!("no such section: {:?}", rest))?,
        "play" => Message::ToggleShowreel,
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            let field = ContactField::from_str(field).ok_or_else(|| format!("no such field: {:?}", field))?;
            Message::ContactInput(field, value.to_string())
        }
        "submit" => Message::ContactSubmit,
        "show" | "" => return Ok(Command::Show),
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(format!("unknown command: {:?} (try help)", other)),
    };
    Ok(Command::Dispatch(message))
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Theme(preference) => format!("theme: {}", preference),
        Outcome::Menu { open } => format!("menu {}", if *open { "open" } else { "closed" }),
        Outcome::ScrollTo(anchor) => format!("scrolled to {}", anchor),
        Outcome::Showreel { playing } => format!("showreel {}", if *playing { "playing" } else { "paused" }),
        Outcome::Testimonial(index) => format!("testimonial {}", index + 1),
        Outcome::FormUpdated => "form updated".to_string(),
        Outcome::Submitted(Some(_)) => "message sent".to_string(),
        Outcome::Submitted(None) => "form closed".to_string(),
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load(),
    };
    let store_path = args
        .store
        .clone()
        .or_else(|| config.storage_path.clone())
        .unwrap_or_else(JsonFileStore::default_path);

    let mut state = PageState::new(config, JsonFileStore::new(store_path), TerminalTheme::new(args.plain))?;
    session(&mut state, io::stdin().lock(), &mut io::stdout())
}

/// Read commands until `quit` or end of input. The contact form is disposed
/// on every exit path.
fn session<S: KeyValueStore>(
    state: &mut PageState<S, TerminalTheme>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let result = command_loop(state, input, out);
    state.teardown();
    result
}

fn command_loop<S: KeyValueStore>(
    state: &mut PageState<S, TerminalTheme>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", render::page(state))?;

    for line in input.lines() {
        let line = line?;
        if state.tick(Instant::now()) {
            writeln!(out, "(contact form reset)")?;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Show) => writeln!(out, "{}", render::page(state))?,
            Ok(Command::Dispatch(message)) => match state.dispatch(message, Instant::now()) {
                Ok(outcome) => {
                    writeln!(out, "{}", describe(&outcome))?;
                    writeln!(out, "{}", render::page(state))?;
                }
                Err(AppError::OutOfRange { index, len }) => {
                    writeln!(out, "no testimonial {} (there are {})", index.saturating_add(1), len)?;
                }
                Err(e) => {
                    warn!("{}", e);
                    writeln!(out, "could not apply: {}", e)?;
                }
            },
            Err(msg) => writeln!(out, "{}", msg)?,
        }
        out.flush()?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelfolio::app::MemoryStore;
    use reelfolio::app::domain::THEME_KEY;
    use std::io::Cursor;

    /// Reads like an empty store but refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "storage disabled").into())
        }
    }

    fn plain_state<S: KeyValueStore>(store: S) -> PageState<S, TerminalTheme> {
        PageState::new(SiteConfig::default(), store, TerminalTheme::new(true)).unwrap()
    }

    fn run_session<S: KeyValueStore>(state: &mut PageState<S, TerminalTheme>, script: &str) -> String {
        let mut out = Vec::new();
        session(state, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::try_parse_from(["reelfolio", "--plain", "--config", "site.toml", "--store", "s.json"]).unwrap();
        assert!(args.plain);
        assert_eq!(args.config, Some(PathBuf::from("site.toml")));
        assert_eq!(args.store, Some(PathBuf::from("s.json")));

        let args = Args::try_parse_from(["reelfolio"]).unwrap();
        assert!(!args.plain);
        assert!(args.config.is_none() && args.store.is_none());
    }

    #[test]
    fn test_args_reject_missing_value_and_unknown_flag() {
        assert!(Args::try_parse_from(["reelfolio", "--config"]).is_err());
        assert!(Args::try_parse_from(["reelfolio", "--store"]).is_err());
        assert!(Args::try_parse_from(["reelfolio", "--colour"]).is_err());
    }

    #[test]
    fn test_store_failure_keeps_session_running() {
        let mut state = plain_state(ReadOnlyStore);
        let out = run_session(&mut state, "theme\nnext\nquit\n");

        assert!(out.contains("could not apply: IO error: storage disabled"));
        assert!(out.contains("testimonial 2"));
        assert_eq!(state.carousel.current_index(), 1);
        assert!(state.contact.is_disposed());
    }

    #[test]
    fn test_session_disposes_form_at_end_of_input() {
        let mut state = plain_state(MemoryStore::new());
        let out = run_session(&mut state, "set name Noor\nsubmit\ntheme\ngoto 9\n");

        assert!(out.contains("message sent"));
        assert!(out.contains("no testimonial 9 (there are 4)"));
        assert!(state.contact.is_disposed());
        assert_eq!(state.contact.pending_reset(), None);
        assert_eq!(state.theme.store().peek(THEME_KEY), Some("dark"));
    }

    fn message(line: &str) -> Message {
        match parse_command(line) {
            Ok(Command::Dispatch(message)) => message,
            _ => panic!("expected a message for {:?}", line),
        }
    }

    #[test]
    fn test_goto_is_one_based() {
        assert_eq!(message("goto 1"), Message::GoToTestimonial(0));
        assert_eq!(message("goto 0"), Message::GoToTestimonial(-1));
        assert!(parse_command("goto two").is_err());
    }

    #[test]
    fn test_set_keeps_spaces_in_value() {
        assert_eq!(
            message("set message Need a trailer cut"),
            Message::ContactInput(ContactField::Message, "Need a trailer cut".to_string())
        );
        assert!(parse_command("set phone 123").is_err());
    }

    #[test]
    fn test_nav_by_label() {
        assert_eq!(message("nav showreel"), Message::Navigate(Section::Showreel));
        assert!(parse_command("nav blog").is_err());
    }

    #[test]
    fn test_control_commands() {
        assert!(matches!(parse_command("quit"), Ok(Command::Quit)));
        assert!(matches!(parse_command(""), Ok(Command::Show)));
        assert!(matches!(parse_command("help"), Ok(Command::Help)));
    }
}
