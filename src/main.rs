use anyhow::Result;
use clap::Parser;
use tracing::info;

use tic_tac_tally::{
    args::{Args, Config},
    logging, ui,
};

fn main() -> Result<()> {
    let config = Config::from(Args::parse());
    let _guard = logging::init(&config.log_dir, &config.log_level)?;

    info!(
        restart_delay = ?config.restart_delay,
        log_dir = %config.log_dir.display(),
        "starting"
    );

    ui::run_ui(&config)
}
