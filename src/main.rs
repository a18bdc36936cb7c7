#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use mysoothe_core::{AppConfig, Locale, ThemeMode, WindowSize};
use tracing_subscriber::EnvFilter;

/// MySoothe - yoga and meditation home screen
#[derive(Parser, Debug)]
#[command(name = "mysoothe-desktop")]
#[command(about = "MySoothe - a calm home screen of yoga and meditation collections")]
struct Args {
    /// Locale for string lookup and casing (e.g. en, en-US)
    #[arg(short, long, default_value = "en")]
    locale: Locale,

    /// Color palette: light or dark
    #[arg(short, long, default_value = "light")]
    theme: ThemeMode,

    /// Directory holding drawables named after their resource keys
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 360.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 640.0)]
    height: f64,
}

/// `<data dir>/mysoothe/drawable`, if it exists
fn default_assets_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("mysoothe").join("drawable"))
        .filter(|dir| dir.is_dir())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = AppConfig {
        locale: args.locale,
        theme_mode: args.theme,
        assets_dir: args.assets_dir.or_else(default_assets_dir),
        window: WindowSize {
            width: args.width,
            height: args.height,
        },
    };

    tracing::info!(
        "Starting MySoothe (locale: {}, theme: {:?}, assets: {:?})",
        config.locale,
        config.theme_mode,
        config.assets_dir
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("MySoothe")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(app::App);
}
