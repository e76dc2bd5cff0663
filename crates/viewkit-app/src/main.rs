//! viewkit demo entry point.
//!
//! Usage: `viewkit-demo [config.json|-] [script.json|-] [files...]`

use std::path::PathBuf;

use viewkit_app::{AppResult, Demo, Script};
use viewkit_core::color::format_color;
use viewkit_core::GuiConfig;

fn main() {
    env_logger::init();
    log::info!("Starting viewkit demo");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next().filter(|arg| arg != "-") {
        Some(path) => GuiConfig::load(path)?,
        None => GuiConfig::default(),
    };
    let script = match args.next().filter(|arg| arg != "-") {
        Some(path) => Script::load(path)?,
        None => Script::builtin(),
    };
    let images: Vec<PathBuf> = args.map(PathBuf::from).collect();

    let mut demo = Demo::new(&config, images);
    let report = demo.run(&script);

    log::info!("Ran {} frames", report.frames);
    log::info!("Material tint: {}", format_color(report.tint));
    log::info!("Background: {}", format_color(report.background));
    log::info!("Button clicks: {}", report.clicks);
    for content in &report.loaded {
        log::info!("Loaded: {:?}", content);
    }
    log::info!("Last frame issued {} draw calls", report.draw_commands);
    Ok(())
}
