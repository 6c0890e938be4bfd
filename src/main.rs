//! Caro GUI
//!
//! Play five-in-a-row against the computer on a 15x15 board.

use std::path::PathBuf;

use caro::config::AppConfig;
use caro::ui::CaroApp;

/// Default config file, overridable with `CARO_CONFIG`
const DEFAULT_CONFIG_PATH: &str = "caro.toml";

fn main() {
    env_logger::init();

    let path = std::env::var_os("CARO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match AppConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("Caro"),
        ..Default::default()
    };

    eframe::run_native(
        "Caro",
        options,
        Box::new(move |cc| Ok(Box::new(CaroApp::new(cc, &config)))),
    )
}
