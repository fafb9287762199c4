use std::{path::PathBuf, process::ExitCode};

use kmun_client::deploy::prepare_static_deploy;
use log::LevelFilter;

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let root = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    log::info!("preparing {} for static hosting", root.display());
    match prepare_static_deploy(&root) {
        Ok(report) => {
            log::info!(
                "deploy ready: {} copied, {} already present, {} missing",
                report.copied.len(),
                report.present.len(),
                report.missing.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
