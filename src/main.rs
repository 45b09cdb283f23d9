use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use profile_card::app::App;
use profile_card::config::AppConfig;
use profile_card::theme::Theme;
use profile_card::{FieldValue, Profile, ProfileCard};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One line per field
    Text,
    /// HTML-like markup of the view tree
    Markup,
    /// View tree as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "profile-card")]
#[command(version)]
#[command(about = "Render a name / age / city profile card")]
struct Args {
    /// Load the profile from a .json or .toml file
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[arg(short, long)]
    name: Option<String>,

    /// Shown verbatim
    #[arg(short, long, allow_hyphen_values = true)]
    age: Option<String>,

    #[arg(short, long)]
    city: Option<String>,

    /// Print the rendered card instead of opening the terminal view
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// kitty-style color file for the terminal view
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Store the resulting profile as the default in the config file
    #[arg(long)]
    save_default: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --format output stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load();

    let profile = resolve_profile(&args, &config).await?;

    if args.save_default {
        config.default_profile = Some(profile.clone());
        config.save()?;
    }

    if let Some(format) = args.format {
        return print_card(&profile, format);
    }

    let theme_path = args.theme.or(config.theme);
    run_tui(&profile, Theme::load(theme_path.as_deref()))
}

/// Config default, then file, then individual flags; later sources win per field.
async fn resolve_profile(args: &Args, config: &AppConfig) -> Result<Profile> {
    let mut profile = config.default_profile.clone().unwrap_or_default();

    if let Some(path) = &args.file {
        profile = profile.overlay(Profile::load(path).await?);
    }

    let flags = Profile {
        name: args.name.clone().map(FieldValue::from),
        age: args.age.clone().map(FieldValue::from),
        city: args.city.clone().map(FieldValue::from),
    };
    profile = profile.overlay(flags);

    if profile.is_empty() {
        tracing::info!("No profile given, rendering blank card");
    }

    Ok(profile)
}

fn print_card(profile: &Profile, format: Format) -> Result<()> {
    let view = ProfileCard::render(profile);

    match format {
        Format::Text => {
            for line in view.lines() {
                println!("{}", line);
            }
        }
        Format::Markup => println!("{}", view.to_markup()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}

fn run_tui(profile: &Profile, theme: Theme) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(profile, theme);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| profile_card::ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("profile-card").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_negative_age_flag_stays_text() {
        let parsed = args(&["--age", "-3"]);
        assert_eq!(parsed.age.as_deref(), Some("-3"));

        let parsed = args(&["-a", "-3", "--format", "text"]);
        assert_eq!(parsed.age.as_deref(), Some("-3"));
    }

    #[tokio::test]
    async fn test_profile_layers_config_then_file_then_flags() {
        let path = std::env::temp_dir().join(format!("profile-card-layers-{}.toml", std::process::id()));
        std::fs::write(&path, "age = 31\ncity = \"Paris\"\n").unwrap();

        let config = AppConfig {
            theme: None,
            default_profile: Some(Profile::new("Ada", 30, "London")),
        };
        let file_arg = path.to_string_lossy().into_owned();
        let parsed = args(&["--file", &file_arg, "--age", "-3"]);

        let profile = resolve_profile(&parsed, &config).await;
        let _ = std::fs::remove_file(&path);
        let profile = profile.unwrap();

        assert_eq!(profile.name, Some(FieldValue::from("Ada")));
        assert_eq!(profile.age, Some(FieldValue::Text("-3".to_string())));
        assert_eq!(profile.city, Some(FieldValue::from("Paris")));
        assert_eq!(
            ProfileCard::render(&profile).lines(),
            vec!["name : Ada", "age : -3", "city : Paris"]
        );
    }

    #[tokio::test]
    async fn test_file_overrides_config_without_flags() {
        let path = std::env::temp_dir().join(format!("profile-card-file-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"name": "Grace"}"#).unwrap();

        let config = AppConfig {
            theme: None,
            default_profile: Some(Profile::new("Ada", 30, "London")),
        };
        let file_arg = path.to_string_lossy().into_owned();
        let profile = resolve_profile(&args(&["--file", &file_arg]), &config).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(profile.unwrap(), Profile::new("Grace", 30, "London"));
    }

    #[tokio::test]
    async fn test_no_sources_gives_blank_profile() {
        let profile = resolve_profile(&args(&[]), &AppConfig::default()).await.unwrap();
        assert!(profile.is_empty());
    }
}
