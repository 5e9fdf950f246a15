use anyhow::{Context, Result};
use display_config_reader::config::{validate_config, ConfigLoader, DEFAULT_CONFIG_FILE};
use display_config_reader::{DisplayConfigReader, DisplayReport, Win32DisplayConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let loader = ConfigLoader::new(&config_path);
    let config = loader
        .load_or_default()
        .with_context(|| format!("failed to load {}", loader.path().display()))?;
    validate_config(&config)?;

    // Initialize logging; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.logging.with_target)
        .with_writer(std::io::stderr)
        .init();

    info!("Display config reader v{}", env!("CARGO_PKG_VERSION"));
    debug!(path = %loader.path().display(), "configuration loaded");

    let flags = config.query_flags()?;
    let reader = DisplayConfigReader::with_flags(Win32DisplayConfig::new()?, flags)?;

    let sizes = reader.get_buffer_sizes()?;
    info!("pathCount: {} modeInfoCount: {}", sizes.paths, sizes.modes);

    let snapshot = reader.query_paths(sizes)?;
    for mode in &snapshot.modes {
        if let Some(signal) = mode.video_signal() {
            debug!(
                id = mode.id,
                hz = signal.v_sync_freq.as_hz_f64(),
                rate = %signal.v_sync_freq,
                "target refresh rate"
            );
        }
    }

    print!("{}", DisplayReport::new(&snapshot).render(config.output.format)?);
    Ok(())
}
