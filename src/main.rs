use clap::Parser;
use log::info;
use mandel_explorer::input::cli::CliArgs;
use mandel_explorer::{ExportController, ExportHandle, ExportStatus, PngFilePresenter};
use std::error::Error;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Logs progress until the export finishes, returning whether it wrote the image.
fn wait_for(handle: &ExportHandle) -> bool {
    let mut last_progress = None;

    loop {
        if let Some(succeeded) = handle.succeeded() {
            return succeeded;
        }

        if let ExportStatus::Running { progress } = handle.status() {
            if last_progress != Some(progress) {
                info!("export {}%", progress);
                last_progress = Some(progress);
            }
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let request = args.export_request()?;
    let output_path = request.output_path.clone();

    let controller = ExportController::new(Arc::new(PngFilePresenter::new()));
    let handle = controller.start_export(request)?;

    if !wait_for(&handle) {
        return Err(format!("export to {} failed", output_path.display()).into());
    }

    info!("wrote {}", output_path.display());
    Ok(())
}
