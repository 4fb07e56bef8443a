mod config;
mod grading;
mod notifications;
mod rubric;
mod ui;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::notifications::Notifier;
use crate::rubric::Rubric;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("gradepad=info".parse().unwrap()),
        )
        .init();

    tracing::info!("📋 GradePad starting...");

    // Load configuration
    let config = Config::load("config.toml");
    tracing::info!("Config: {:?}", config);

    // Load the rubric table
    let rubric = Rubric::load(&config.rubric.path);
    tracing::info!(
        "Rubric '{}' loaded with {} sections",
        rubric.title,
        rubric.sections.len()
    );

    let window_title = config.ui.window_title.clone();
    let window_size = dioxus::desktop::tao::dpi::LogicalSize::new(
        config.ui.window_width,
        config.ui.window_height,
    );

    // Store rubric, notifier, and config in globals so the Dioxus app can grab them
    UI_NOTIFIER.set(Notifier::new(&config.notifications)).ok();
    UI_RUBRIC.set(rubric).ok();
    UI_CONFIG.set(config).ok();

    // Launch Dioxus desktop app (blocks)
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::tao::window::WindowBuilder::new()
                    .with_title(window_title)
                    .with_inner_size(window_size),
            ),
        )
        .launch(ui::App);
}

/// Global rubric for UI access.
static UI_RUBRIC: std::sync::OnceLock<Rubric> = std::sync::OnceLock::new();

/// Global config for UI access.
static UI_CONFIG: std::sync::OnceLock<Config> = std::sync::OnceLock::new();

/// Global notifier for UI access.
static UI_NOTIFIER: std::sync::OnceLock<Notifier> = std::sync::OnceLock::new();

/// Get the loaded rubric.
pub fn get_rubric() -> &'static Rubric {
    UI_RUBRIC.get().expect("Rubric not initialized")
}

/// Get the global config.
pub fn get_config() -> &'static Config {
    UI_CONFIG.get().expect("Config not initialized")
}

/// Get the global notifier.
pub fn get_notifier() -> &'static Notifier {
    UI_NOTIFIER.get().expect("Notifier not initialized")
}
