//! Jot Desktop Application
//!
//! The desktop shell for Jot: theme switching, toast notifications,
//! keyboard-shortcut help, and cloud-sync account settings.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jot=debug".parse().expect("static directive parses")),
        )
        .init();

    tracing::info!("Starting Jot...");

    let window = WindowBuilder::new().with_title("Jot");
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
