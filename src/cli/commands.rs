//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "emolex")]
#[command(about = "Lexicon-based emotion analysis for Chinese text")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: level from config)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP analysis service
    Serve {
        /// Host address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable permissive CORS
        #[arg(long)]
        cors: bool,
    },
    /// Analyze text, a .txt/.docx file, or standard input
    Analyze {
        /// Text to analyze
        text: Option<String>,
        /// Read text from a .txt or .docx file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load the emotion lexicon strictly and report what it contains
    Lexicon {
        /// Lexicon file (overrides config)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Show current configuration
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_text() {
        let cli = Cli::try_parse_from(["emolex", "analyze", "我很怒", "--json"]).unwrap();
        match cli.command {
            Commands::Analyze { text, file, json } => {
                assert_eq!(text.as_deref(), Some("我很怒"));
                assert!(file.is_none());
                assert!(json);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_analyze_text_and_file_conflict() {
        assert!(Cli::try_parse_from(["emolex", "analyze", "怒", "--file", "a.txt"]).is_err());
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli =
            Cli::try_parse_from(["emolex", "-v", "serve", "--port", "8080", "--cors"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Serve { host, port, cors } => {
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
                assert!(cors);
            }
            _ => panic!("expected serve command"),
        }
    }
}
