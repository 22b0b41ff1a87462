//! folio - portfolio theme and carousel utility
//!
//! Inspects the theme catalog, edits the persisted theme preference,
//! exports the style variables as CSS, and replays carousel input scripts.

mod config;
mod logging;
mod script;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::FolioConfig;
use folio_carousel::{Carousel, KeyboardHub, MountedCarousel};
use folio_theme::picker::{picker_entries, trigger_style};
use folio_theme::{style_variables, FilePreferences, ThemeDefinition, ThemeId, ThemeStore};
use std::path::PathBuf;
use tracing_subscriber::util::SubscriberInitExt;

/// Portfolio theme and carousel utility
#[derive(Parser)]
#[command(name = "folio", version, about = "Inspect themes, export style variables, drive the carousel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Preference file (overrides the configured path)
    #[arg(long, env = "FOLIO_PREFERENCES")]
    preferences: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the theme catalog
    Themes,

    /// Theme management
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },

    /// Print the style variables as a CSS :root block
    Css {
        /// Theme to export (defaults to the persisted selection)
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Replay an input script against a carousel
    Carousel {
        /// Image references, in display order
        #[arg(required = true)]
        images: Vec<String>,

        /// Prefix for slide descriptions
        #[arg(short, long)]
        prefix: Option<String>,

        /// Comma-separated events: left, right, goto:N, swipe:DX, tap
        #[arg(short, long, default_value = "")]
        events: String,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Show a theme and its derived variables
    Show {
        /// Theme identifier (defaults to the persisted selection)
        id: Option<String>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Persist a theme selection
    Set {
        /// Theme identifier
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout stays pipeable)
    let (subscriber, filter) = logging::subscriber(
        tracing_subscriber::EnvFilter::try_from_default_env().ok(),
        std::io::stderr,
    );
    subscriber.init();

    let config = FolioConfig::load(&cli.config.clone().unwrap_or_else(FolioConfig::default_path));
    filter.apply(&config.logging);

    let preferences_path = cli
        .preferences
        .clone()
        .unwrap_or_else(|| config.preferences.path.clone());
    tracing::debug!("Using preferences at {}", preferences_path.display());

    match cli.command {
        Commands::Themes => {
            let store = ThemeStore::new(FilePreferences::open(&preferences_path));
            println!("Themes");
            println!("======");
            for entry in picker_entries(store.current_id()) {
                println!(
                    "{} {:<10} {:<10} {}",
                    if entry.selected { "*" } else { " " },
                    entry.id,
                    entry.name,
                    entry.swatch
                );
            }
        }

        Commands::Theme { command } => match command {
            ThemeCommands::Show { id, json } => {
                let theme = match id {
                    Some(id) => parse_theme(&id)?.definition(),
                    None => ThemeStore::new(FilePreferences::open(&preferences_path)).current(),
                };
                if json {
                    let out = serde_json::json!({
                        "theme": theme,
                        "variables": style_variables(theme.id),
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                } else {
                    print_theme(theme);
                }
            }

            ThemeCommands::Set { id } => {
                let mut store = ThemeStore::new(FilePreferences::open(&preferences_path));
                if !store.set_theme_by_name(&id) {
                    bail!("{}", unknown_theme_message(&id));
                }
                tracing::info!("Theme set to {}", store.current_id());
                println!("Theme set to {}", store.current().name);
            }
        },

        Commands::Css { theme } => {
            let id = match theme {
                Some(id) => parse_theme(&id)?,
                None => ThemeStore::new(FilePreferences::open(&preferences_path)).current_id(),
            };
            print!("{}", style_variables(id).to_css());
        }

        Commands::Carousel {
            images,
            prefix,
            events,
        } => {
            let events = script::parse(&events).context("Invalid event script")?;
            let carousel = Carousel::with_config(images, config.carousel.gesture())?
                .with_label_prefix(prefix.unwrap_or_else(|| config.carousel.label_prefix.clone()));

            let hub = KeyboardHub::new();
            let mounted = MountedCarousel::mount(carousel, &hub);
            let trail = script::replay(&mounted, &hub, &events);

            println!("Carousel");
            println!("========");
            println!(
                "Trail:   {}",
                trail
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ")
            );
            let view = mounted.view();
            for (slide, image) in view.slides.iter().zip(mounted.with(|c| c.images().to_vec())) {
                println!(
                    "{} [{}] {:<24} {:<6} {}",
                    if slide.active { ">" } else { " " },
                    slide.index,
                    slide.alt,
                    slide.loading.as_str(),
                    image
                );
            }
            mounted.unmount();
        }
    }

    Ok(())
}

fn parse_theme(id: &str) -> Result<ThemeId> {
    id.parse::<ThemeId>()
        .map_err(|_| anyhow::anyhow!(unknown_theme_message(id)))
}

fn unknown_theme_message(id: &str) -> String {
    let known: Vec<&str> = ThemeId::ALL.iter().map(|t| t.as_str()).collect();
    format!("Unknown theme {:?} (expected one of: {})", id, known.join(", "))
}

fn print_theme(theme: &ThemeDefinition) {
    let trigger = trigger_style(theme);
    println!("{} ({})", theme.name, theme.id);
    println!("==========================");
    println!("Accent:        {} ({})", theme.accent_family, theme.indicator.name());
    println!(
        "Ramp:          {}",
        theme
            .accent_ramp()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!("Background:    {}", theme.background);
    println!(
        "Navigation:    {} {} ({})",
        theme.nav_background,
        theme.nav_background_color,
        if theme.has_light_nav() { "light" } else { "dark" }
    );
    println!("Text:          {} {}", theme.text, theme.text_color);
    println!("Nav text:      {}", theme.nav_text);
    println!("Picker button: {} {}", trigger.icon.name(), trigger.color);
    println!();
    println!("Variables");
    println!("---------");
    for (name, value) in style_variables(theme.id).entries() {
        println!("--{:<24} {}", name, value);
    }
}
