use dioxus::prelude::*;
use mailcanvas_config::Config;
use mailcanvas_engine::DEFAULT_STORAGE_KEY;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;

/// Where the template lives for this run
#[derive(Debug, Clone, PartialEq)]
struct LaunchSettings {
    storage_dir: PathBuf,
    storage_key: String,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("mailcanvas starting up!");

    let settings = match resolve_settings() {
        Ok(settings) => settings,
        Err(message) => {
            eprintln!("Error: {message}");
            let program_name = env::args()
                .next()
                .unwrap_or_else(|| "mailcanvas".to_string());
            eprintln!("Usage: {program_name} [storage-folder-path]");
            process::exit(1);
        }
    };

    log::info!(
        "Using storage {} with key '{}'",
        settings.storage_dir.display(),
        settings.storage_key
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(settings)
        .launch(app_root);
}

/// CLI argument, then config file, then the default data directory
fn resolve_settings() -> Result<LaunchSettings, String> {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => return Err(format!("Failed to load config file: {e}")),
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let storage_dir = match args.as_slice() {
        [] => config.storage_dir,
        [path] => {
            log::info!("Using storage path from CLI argument: {path}");
            PathBuf::from(path)
        }
        _ => return Err("Too many arguments".to_string()),
    };

    Ok(LaunchSettings {
        storage_dir,
        storage_key: config
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
    })
}

fn app_root() -> Element {
    let settings = use_context::<LaunchSettings>();

    rsx! {
        App {
            storage_dir: settings.storage_dir,
            storage_key: settings.storage_key,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("mailcanvas")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
