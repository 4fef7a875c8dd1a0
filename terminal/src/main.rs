//! Swap terminal binary: sets up logging and the Tokio runtime, then runs the
//! egui window.

use swap_terminal::app::App;
use swap_terminal::debug;
use swap_terminal::ui::{self, theme::Theme, widgets::notifications::NotificationManager};
use swap_terminal::utils::runtime::TOKIO_RT;

const APP_TITLE: &str = "Swap Terminal";

/// eframe adapter: owns the orchestrator and the toast queue
struct SwapTerminalApp {
    app: App,
    notifications: NotificationManager,
}

impl SwapTerminalApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::apply_terminal_theme(&cc.egui_ctx);
        Self {
            app: App::new(),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for SwapTerminalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications);
    }
}

fn main() -> eframe::Result {
    debug::init();

    // Tasks spawned from the UI thread land on this runtime
    let _guard = TOKIO_RT.enter();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting swap terminal");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(SwapTerminalApp::new(cc)))),
    )
}
