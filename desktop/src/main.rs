mod app;
mod storage;

use app::TimesQuizApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 360.0])
            .with_min_inner_size([340.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Times Table Quiz",
        options,
        Box::new(|cc| Ok(Box::new(TimesQuizApp::new(cc)))),
    )
}
