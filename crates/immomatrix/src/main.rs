//! ImmoMatrix: vacancy and marketing ROI calculators for Swiss real estate.

use immomatrix_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable.
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        app::report_error(&config, &err);
        std::process::exit(errors::exit_code(&err));
    }
}
