#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "Meraki - The Art Studio";
const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 860.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting '{}' ({}x{})", WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
