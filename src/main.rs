use stego_studio::gui::StudioApp;
use stego_studio::logging;
use stego_studio::settings::{Settings, SETTINGS_FILE};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    let (width, height) = settings.window_size.unwrap_or((900.0, 640.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    let app = StudioApp::new(&settings);
    eframe::run_native(
        "Стеганографія зображень",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to start ui: {e}"))?;
    Ok(())
}
