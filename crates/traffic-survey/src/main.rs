//! Main entry point for the traffic survey analyser.

use std::io;
use tracing::{error, info};
use traffic_common::init_logging;
use traffic_config::ConfigLoader;
use traffic_survey::{Session, SurveyResult};

fn main() -> SurveyResult<()> {
    let config = ConfigLoader::load()?;
    init_logging(&config.logging.to_logging_config())?;

    info!(
        dates = config.data.available_dates.len(),
        data_dir = %config.data.data_dir.display(),
        "Starting traffic survey analyser"
    );

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout());

    if let Err(e) = session.run() {
        error!("Session ended abnormally: {}", e);
        return Err(e);
    }

    Ok(())
}
