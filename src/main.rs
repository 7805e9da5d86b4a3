#![warn(clippy::all)]

use sparklife::{App, Config, Settings};

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();
    let settings = Settings::from_env();

    let [w, h] = Config::WINDOW_SIZE;
    let [min_w, min_h] = Config::MIN_WINDOW_SIZE;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Sparklife")
            .with_inner_size(vec2(w, h))
            .with_min_inner_size(vec2(min_w, min_h)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(
        "Sparklife",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, settings)?))),
    )
}
