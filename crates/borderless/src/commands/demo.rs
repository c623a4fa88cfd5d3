use borderless_core::{config, log, log_error, log_info};

/// Opens the demo window with the user's configuration.
pub fn execute() {
    let config = config::load();
    log::init(&config.logging);
    log_info!("starting demo");

    if let Err(e) = run(&config) {
        log_error!("demo failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn run(config: &config::Config) -> borderless_core::ChromeResult<()> {
    borderless_windows::demo::run(config)
}

#[cfg(not(windows))]
fn run(_config: &config::Config) -> borderless_core::ChromeResult<()> {
    Err("the demo window is only available on Windows".into())
}
