use clap::Parser;
use emolex::cli::*;
use emolex::config::AppConfig;
use emolex::config::ConfigSource;
use emolex::Lexicon;
use emolex::Result;
use tracing::info;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let source = ConfigSource::discover(cli.config.as_deref());
    let config = AppConfig::from_source(&source)?;

    // Initialize logging
    if cli.verbose {
        emolex::logging::init_logging_with_level("debug")?;
    } else {
        emolex::logging::init_logging_with_config(Some(&config))?;
    }
    if let Some(notice) = source.fallback_notice() {
        warn!("{}", notice);
    } else if let Some(path) = source.path() {
        info!("Configuration loaded from {}", path.display());
    }

    // Execute the requested command
    let outcome = match cli.command {
        Commands::Serve { host, port, cors } => {
            handle_serve_command(&config, host, port, cors).await
        }
        Commands::Analyze { text, file, json } => {
            let lexicon = Lexicon::load(config.lexicon_path());
            handle_analyze_command(&lexicon, text, file.as_deref(), json)
        }
        Commands::Lexicon { path } => handle_lexicon_command(&config, path),
        Commands::Config => handle_config_command(&config),
    };

    if let Err(e) = &outcome {
        print_error(&e.to_string());
    }
    outcome
}
