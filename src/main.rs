#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::Locale;

/// Locale selected on the command line, read once at app start
static INITIAL_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Get the locale the app was launched with.
pub fn initial_locale() -> Locale {
    INITIAL_LOCALE.get().copied().unwrap_or_default()
}

/// Folio - bilingual portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio with responsive disclosure and overlays")]
struct Args {
    /// Locale to render ("en" or "fr")
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let locale: Locale = match args.locale.parse() {
        Ok(locale) => locale,
        Err(e) => {
            tracing::warn!("{e}, falling back to English");
            Locale::En
        }
    };
    let _ = INITIAL_LOCALE.set(locale);

    tracing::info!(
        "Starting folio ({locale}) at {}x{}",
        args.width,
        args.height
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
