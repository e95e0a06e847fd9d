//! Tic-tac-toe GUI
//!
//! Native builds open a window; `wasm32` builds mount onto a canvas in the
//! host page.

use tictactoe::ui::TicTacToeApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), tictactoe::error::AppError> {
    use clap::Parser;
    use tictactoe::cli::Cli;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, reload, EnvFilter};

    let cli = Cli::parse();

    // Logging comes up before the config file is read, then picks up the
    // configured filter unless RUST_LOG was given.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let initial = env_filter.unwrap_or_else(|| EnvFilter::new(cli.initial_log_filter()));
    let (filter, handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let config = cli.resolve_config()?;
    if !from_env {
        if let Err(err) = handle.reload(EnvFilter::new(&config.log_filter)) {
            tracing::warn!(%err, "Failed to apply configured log filter");
        }
    }

    tracing::info!(title = %config.title, "Opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 360.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "tictactoe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
    )?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    let config = tictactoe::AppConfig::default();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(canvas) = find_canvas(&config.canvas_id) else {
            tracing::error!(canvas_id = %config.canvas_id, "Canvas element not found");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, &config)))),
            )
            .await;

        if let Err(err) = result {
            tracing::error!(?err, "Failed to start web app");
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> Option<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}
