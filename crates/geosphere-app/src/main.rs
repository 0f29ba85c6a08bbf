mod cli;
mod logging;
mod run;

use std::process::ExitCode;

use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Logging goes up before config loading; the config's [logging] level
    // replaces the filter once known unless --log-level was given.
    let initial = args.log_level.as_deref().unwrap_or(logging::DEFAULT_DIRECTIVE);
    let (subscriber, filter) = logging::subscriber(initial, std::io::stderr);
    subscriber.init();

    tracing::info!("Geosphere v{} starting...", env!("CARGO_PKG_VERSION"));

    let (config, warning) = match run::load(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    if args.log_level.is_none() {
        if let Err(e) = logging::set_directive(&filter, config.logging.level.directive()) {
            tracing::warn!("failed to apply configured log level: {e}");
        }
    }
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let config = match run::apply_overrides(config, &args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref path) = args.save_config {
        if let Err(e) = geosphere_config::save_config_to_path(&config, path) {
            tracing::warn!("Failed to save config to {}: {e}", path.display());
        }
    }

    if args.print_config {
        println!("{}", geosphere_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let stdout = std::io::stdout();
    match run::run(&args, &config, &mut stdout.lock()) {
        Ok(stats) => {
            tracing::info!(
                vertices = stats.vertices,
                triangles = stats.triangles,
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
