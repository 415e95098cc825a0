use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::runtime::config;

pub fn init() {
    let format = fmt::layer().with_level(true).with_target(true).compact();

    let filter =
        EnvFilter::from_env("MPRJ_FIR_LOG").add_directive(config::config().log_level.into());

    if tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
        .is_err()
    {
        debug!("logger already initialized");
    }
}
