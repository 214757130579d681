use clap::Parser;
use product_report::utils::{logger, validation::Validate};
use product_report::{CliConfig, ReportEngine, ReportError};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    logger::init_cli_logger(settings.verbose);
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        exit_with(e);
    }

    let engine = ReportEngine::new(settings);
    match engine.run() {
        Ok(report) => print!("{}", report),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: ReportError) -> ! {
    tracing::debug!("Run failed: {:?} (category: {:?})", e, e.category());
    eprintln!("Error: {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
