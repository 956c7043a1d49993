use clap::Parser;
use mandel_explorer::input::cli::CliArgs;
use mandel_explorer::{GuiOptions, PngFilePresenter, run_gui};
use std::error::Error;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let options = GuiOptions {
        viewport: args.viewport()?,
        config: args.preview_config()?,
        export: args.export_settings(),
    };

    run_gui(options, Arc::new(PngFilePresenter::new()))?;

    Ok(())
}
