use crate::config::Config;

/// Initializes the `log4rs` backend from `log4rs.yml` in the config dir.
/// `tracing` events emitted by this crate are forwarded to it.
pub fn setup_logging() -> anyhow::Result<()> {
    let config_dir = Config::get_config_dir()?;
    let log_config_filename = format!("{}/log4rs.yml", config_dir);

    log4rs::init_file(log_config_filename, Default::default())?;

    Ok(())
}
