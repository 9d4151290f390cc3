use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use scatterview::{run_viewer, DatasetKey, ViewerConfig};

/// Interactive 2D scatter-plot viewer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML or JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding `<key>.csv` dataset files.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Dataset shown at startup.
    #[arg(long)]
    dataset: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => match ViewerConfig::load_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => ViewerConfig::default(),
    };
    if let Some(dir) = args.data_dir {
        cfg.data_dir = dir;
    }
    if let Some(key) = args.dataset {
        cfg.initial_dataset = Some(DatasetKey::new(key));
    }
    if let Err(e) = cfg.validate() {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }

    match run_viewer(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Viewer exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}
