use std::path::PathBuf;
use std::process::ExitCode;

use curvesketch::data::hotkeys::Hotkeys;
use curvesketch::{run_sketch, SketchConfig, SketchSettings};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Optional single argument: path to a settings YAML file.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut settings = SketchSettings::load_or_default(path.as_deref());
    // A standalone hotkeys.yaml overrides the bindings embedded in the settings.
    settings.hotkeys = Hotkeys::load_default_or(settings.hotkeys);

    match run_sketch(SketchConfig::from_settings(settings), None) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "sketch window failed");
            ExitCode::FAILURE
        }
    }
}
