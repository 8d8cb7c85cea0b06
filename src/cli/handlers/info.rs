//! Information display handlers (lexicon report, config)

use std::path::PathBuf;

use crate::cli::output::*;
use crate::AppConfig;
use crate::Lexicon;
use crate::Result;

pub fn handle_lexicon_command(config: &AppConfig, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| config.lexicon_path().to_path_buf());
    let (lexicon, report) = Lexicon::try_load(&path)?;

    print_load_report(&path, &lexicon, &report);
    if lexicon.is_empty() {
        print_warning("The lexicon contains no usable characters");
    } else {
        print_success("Lexicon loaded");
    }

    Ok(())
}

pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
