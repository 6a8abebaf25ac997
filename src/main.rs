use lazy_calc::Config;
use tracing::warn;

#[cfg(feature = "gui")]
use gtk::prelude::*;
#[cfg(feature = "gui")]
use gtk::{gio, glib, Application};

#[cfg(feature = "gui")]
const APP_ID: &str = "com.lazycalc.calculator";

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lazy_calc=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!(error = %e, path = ?Config::config_path(), "using default config");
        Config::default()
    })
}

#[cfg(feature = "gui")]
fn main() -> glib::ExitCode {
    init_logging();
    let config = load_config();

    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_activate(move |app| {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        lazy_calc::ui::build_ui(app, config.clone());
    });

    app.run()
}

#[cfg(not(feature = "gui"))]
fn main() -> std::process::ExitCode {
    init_logging();
    let config = load_config();

    let stdin = std::io::stdin();
    match lazy_calc::console::run_console(
        stdin.lock(),
        std::io::stdout(),
        config.calculator.normalization,
    ) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "console i/o failed");
            std::process::ExitCode::FAILURE
        }
    }
}
